//! Display row shape of the `membership_overview` SQL view.

use crate::{MembershipStatus, PlanTier};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Joined profile + membership row, read from the composed view.
///
/// Display only: standing derivation always runs over raw
/// `MembershipRecord`s so it cannot depend on a stale view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipOverview {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub profile_email: String,
    pub profile_display_name: Option<String>,
    pub plan: PlanTier,
    pub status: MembershipStatus,
    pub start_date: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub addon_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
