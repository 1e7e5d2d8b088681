pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::admin_grant_repository::AdminGrantRepository;
pub use repositories::membership_repository::MembershipRepository;
pub use repositories::profile_repository::ProfileRepository;

/// Embedded migrations, shared by the server binary and every test pool
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
