use crate::MembershipDto;

use mp_core::MembershipStanding;

use serde::Serialize;

/// Derived standing shape returned by the API.
///
/// `state` is "current", "lapsed", or "unknown"; support tooling relies on
/// lapsed-vs-unknown staying distinguishable even though both gate the same.
#[derive(Debug, Clone, Serialize)]
pub struct StandingDto {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<MembershipDto>,
}

impl From<&MembershipStanding> for StandingDto {
    fn from(standing: &MembershipStanding) -> Self {
        match standing {
            MembershipStanding::Current { record } => Self {
                state: "current",
                record: Some(record.clone().into()),
            },
            MembershipStanding::Lapsed => Self {
                state: "lapsed",
                record: None,
            },
            MembershipStanding::Unknown => Self {
                state: "unknown",
                record: None,
            },
        }
    }
}
