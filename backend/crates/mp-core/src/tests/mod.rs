mod models;

use crate::{MembershipRecord, MembershipStatus, PlanTier};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub(crate) fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub(crate) fn record(
    plan: PlanTier,
    status: MembershipStatus,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> MembershipRecord {
    MembershipRecord {
        id: Uuid::new_v4(),
        profile_id: Uuid::new_v4(),
        plan,
        status,
        start_date: created_at,
        expires_at,
        notes: None,
        addon_access: false,
        created_at,
        updated_at: None,
    }
}
