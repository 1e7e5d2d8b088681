use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PasswordlessRequest {
    pub email: String,
    /// Path to land on after the confirmation link completes
    pub next: Option<String>,
}
