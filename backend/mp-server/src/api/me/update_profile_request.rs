use mp_core::Profile;

use serde::Deserialize;

/// Self-service profile edit.
///
/// Omitted fields are left unchanged; an empty string clears the field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub alternate_email: Option<String>,
    pub discord_handle: Option<String>,
    pub game_username: Option<String>,
}

impl UpdateProfileRequest {
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(ref value) = self.display_name {
            profile.display_name = normalize(value);
        }
        if let Some(ref value) = self.alternate_email {
            profile.alternate_email = normalize(value);
        }
        if let Some(ref value) = self.discord_handle {
            profile.discord_handle = normalize(value);
        }
        if let Some(ref value) = self.game_username {
            profile.game_username = normalize(value);
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
