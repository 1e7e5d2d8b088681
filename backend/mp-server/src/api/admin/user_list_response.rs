use crate::ProfileDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<ProfileDto>,
}
