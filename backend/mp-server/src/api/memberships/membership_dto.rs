use mp_core::MembershipRecord;

use serde::Serialize;

/// Membership record shape returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct MembershipDto {
    pub id: String,
    pub plan: String,
    pub status: String,
    pub start_date: String,
    pub expires_at: String,
    pub notes: Option<String>,
    pub addon_access: bool,
}

impl From<MembershipRecord> for MembershipDto {
    fn from(record: MembershipRecord) -> Self {
        Self {
            id: record.id.to_string(),
            plan: record.plan.as_str().to_string(),
            status: record.status.as_str().to_string(),
            start_date: record.start_date.to_rfc3339(),
            expires_at: record.expires_at.to_rfc3339(),
            notes: record.notes,
            addon_access: record.addon_access,
        }
    }
}
