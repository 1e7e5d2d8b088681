use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid plan tier: {value} {location}")]
    InvalidPlanTier {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid membership status: {value} {location}")]
    InvalidMembershipStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
