//! Authenticated identity as issued by the external provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata captured on the registration form and carried by the provider.
///
/// Absent fields mean "no opinion": they never erase data already stored on
/// the profile when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationMetadata {
    pub display_name: Option<String>,
    pub alternate_email: Option<String>,
    pub discord_handle: Option<String>,
    pub game_username: Option<String>,
}

impl RegistrationMetadata {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.alternate_email.is_none()
            && self.discord_handle.is_none()
            && self.game_username.is_none()
    }
}

/// Session-scoped identity issued by the external provider.
///
/// Never persisted; the durable record is the `Profile` resolved from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    /// Stable identifier issued by the provider
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub metadata: RegistrationMetadata,
}

impl AuthenticatedIdentity {
    pub fn new(id: Uuid, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            metadata: RegistrationMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: RegistrationMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
