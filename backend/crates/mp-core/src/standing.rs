//! Current membership standing derived from raw records.

use crate::MembershipRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Computed view of a profile's access level; never persisted.
///
/// `Lapsed` and `Unknown` gate identically (no access) but support tooling
/// needs to tell "had a membership once" apart from "never had one".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MembershipStanding {
    /// One record is active and unexpired as of the evaluation time
    Current { record: MembershipRecord },
    /// History exists but nothing is currently valid
    Lapsed,
    /// The profile has no membership records at all
    Unknown,
}

impl MembershipStanding {
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current { .. })
    }

    pub fn current_record(&self) -> Option<&MembershipRecord> {
        match self {
            Self::Current { record } => Some(record),
            _ => None,
        }
    }
}

/// Derive the single current standing from a profile's membership records.
///
/// Pure and deterministic: records whose status is active and whose
/// expiration is on/after `as_of` survive the filter, and the most recently
/// updated survivor wins. Ties break by latest expiration, then highest
/// plan tier.
pub fn derive(records: &[MembershipRecord], as_of: DateTime<Utc>) -> MembershipStanding {
    if records.is_empty() {
        return MembershipStanding::Unknown;
    }

    let winner = records
        .iter()
        .filter(|record| record.is_valid_at(as_of))
        .max_by(|a, b| {
            a.last_updated()
                .cmp(&b.last_updated())
                .then_with(|| a.expires_at.cmp(&b.expires_at))
                .then_with(|| a.plan.cmp(&b.plan))
        });

    match winner {
        Some(record) => MembershipStanding::Current {
            record: record.clone(),
        },
        None => MembershipStanding::Lapsed,
    }
}
