use crate::{MembershipOverviewDto, ProfileDto, StandingDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: ProfileDto,
    /// Full membership history, newest first (display rows)
    pub memberships: Vec<MembershipOverviewDto>,
    /// Derived standing; tells support "lapsed" apart from "never joined"
    pub standing: StandingDto,
}
