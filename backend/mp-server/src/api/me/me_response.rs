use crate::{ProfileDto, StandingDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub profile: ProfileDto,
    pub membership: StandingDto,
}
