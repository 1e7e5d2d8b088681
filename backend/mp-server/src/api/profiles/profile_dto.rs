use mp_core::Profile;

use serde::Serialize;

/// Profile shape returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub alternate_email: Option<String>,
    pub discord_handle: Option<String>,
    pub game_username: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email,
            display_name: profile.display_name,
            alternate_email: profile.alternate_email,
            discord_handle: profile.discord_handle,
            game_username: profile.game_username,
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}
