use crate::ProfileDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub profile: ProfileDto,
}

#[derive(Debug, Serialize)]
pub struct PasswordlessResponse {
    pub message: String,
}
