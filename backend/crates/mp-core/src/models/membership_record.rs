//! Membership record - one purchased or granted interval of access.

use crate::{MembershipStatus, PlanTier};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of membership history. The point-of-sale system is the sole
/// writer; this application only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub plan: PlanTier,
    pub status: MembershipStatus,
    pub start_date: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub notes: Option<String>,
    /// Supplemental feature entitlement
    pub addon_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MembershipRecord {
    /// Most recent write; falls back to creation when never updated
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Active and unexpired at `as_of`. The boundary is inclusive: a record
    /// expiring exactly at `as_of` is still valid.
    pub fn is_valid_at(&self, as_of: DateTime<Utc>) -> bool {
        self.status == MembershipStatus::Active && self.expires_at >= as_of
    }
}
