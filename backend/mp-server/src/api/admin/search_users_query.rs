use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchUsersQuery {
    /// Email fragment to match, case-insensitive
    pub email: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
