use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntitlementsResponse {
    pub plan: String,
    pub addon_access: bool,
    pub expires_at: String,
}
