use mp_core::MembershipOverview;

use serde::Serialize;

/// Joined display row for the admin detail screen
#[derive(Debug, Clone, Serialize)]
pub struct MembershipOverviewDto {
    pub id: String,
    pub profile_email: String,
    pub profile_display_name: Option<String>,
    pub plan: String,
    pub status: String,
    pub start_date: String,
    pub expires_at: String,
    pub notes: Option<String>,
    pub addon_access: bool,
    pub created_at: String,
}

impl From<MembershipOverview> for MembershipOverviewDto {
    fn from(row: MembershipOverview) -> Self {
        Self {
            id: row.id.to_string(),
            profile_email: row.profile_email,
            profile_display_name: row.profile_display_name,
            plan: row.plan.as_str().to_string(),
            status: row.status.as_str().to_string(),
            start_date: row.start_date.to_rfc3339(),
            expires_at: row.expires_at.to_rfc3339(),
            notes: row.notes,
            addon_access: row.addon_access,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}
