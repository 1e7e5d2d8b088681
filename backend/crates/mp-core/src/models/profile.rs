//! Profile entity - the durable application user record.

use crate::RegistrationMetadata;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One profile per external identity, created on the first successful
/// authentication callback. `identity_id` is the identity key; the login
/// email is informational once the profile exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// External identity id (unique across profiles)
    pub identity_id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub alternate_email: Option<String>,
    pub discord_handle: Option<String>,
    pub game_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile seeded from an identity's email
    pub fn new(identity_id: Uuid, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            identity_id,
            email: email.into(),
            display_name: None,
            alternate_email: None,
            discord_handle: None,
            game_username: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge registration metadata field by field. A field overwrites only
    /// when the incoming value is present. Returns true when anything
    /// actually changed, so callers can skip a no-op write.
    pub fn apply_metadata(&mut self, metadata: &RegistrationMetadata) -> bool {
        let mut changed = false;

        if let Some(ref value) = metadata.display_name
            && self.display_name.as_deref() != Some(value.as_str())
        {
            self.display_name = Some(value.clone());
            changed = true;
        }

        if let Some(ref value) = metadata.alternate_email
            && self.alternate_email.as_deref() != Some(value.as_str())
        {
            self.alternate_email = Some(value.clone());
            changed = true;
        }

        if let Some(ref value) = metadata.discord_handle
            && self.discord_handle.as_deref() != Some(value.as_str())
        {
            self.discord_handle = Some(value.clone());
            changed = true;
        }

        if let Some(ref value) = metadata.game_username
            && self.game_username.as_deref() != Some(value.as_str())
        {
            self.game_username = Some(value.clone());
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }

        changed
    }
}
