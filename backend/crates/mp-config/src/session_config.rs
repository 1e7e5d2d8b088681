use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE, MIN_SESSION_SECRET_BYTES};

use serde::Deserialize;

/// Session token validation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// HS256 secret shared with the identity provider; required at startup
    pub jwt_secret: Option<String>,
    /// Cookie carrying the session token for browser flows
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            cookie_name: String::from(DEFAULT_SESSION_COOKIE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None => Err(ConfigError::session(
                "session.jwt_secret is required (set MP_SESSION_JWT_SECRET)",
            )),
            Some(secret) if secret.len() < MIN_SESSION_SECRET_BYTES => {
                Err(ConfigError::session(format!(
                    "session.jwt_secret must be at least {} bytes",
                    MIN_SESSION_SECRET_BYTES
                )))
            }
            Some(_) => Ok(()),
        }?;

        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::session(
                "session.cookie_name must be non-empty and contain only [A-Za-z0-9_-]",
            ));
        }

        Ok(())
    }
}
