pub mod error;
pub mod gate;
pub mod models;
pub mod standing;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::{AuthenticatedIdentity, RegistrationMetadata};
pub use models::membership_overview::MembershipOverview;
pub use models::membership_record::MembershipRecord;
pub use models::membership_status::MembershipStatus;
pub use models::plan_tier::PlanTier;
pub use models::profile::Profile;
pub use standing::MembershipStanding;

#[cfg(test)]
mod tests;
