mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod rate_limit_config;
mod server_config;
mod session_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE_FILENAME: &str = "portal.db";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_COOKIE: &str = "mp_session";
const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 10;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const MIN_PORT: u16 = 1024;
const MIN_SESSION_SECRET_BYTES: usize = 32;
const MAX_PROVIDER_TIMEOUT_SECS: u64 = 120;

#[cfg(test)]
mod tests;
