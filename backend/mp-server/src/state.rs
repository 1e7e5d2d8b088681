use crate::error::{Result as ServerErrorResult, ServerError};

use mp_auth::{IdentityProviderClient, LoginRateLimiter, SessionValidator};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared per-request dependencies.
///
/// Everything is constructed once at startup and handed to handlers through
/// axum state; there are no module-level client handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub provider: Arc<IdentityProviderClient>,
    pub sessions: Arc<SessionValidator>,
    pub login_limiter: Arc<LoginRateLimiter>,
    /// Cookie carrying the session token for browser flows
    pub cookie_name: String,
    /// Public base URL of this portal, used to build callback redirects
    pub public_base_url: String,
}

impl AppState {
    pub fn from_config(config: &mp_config::Config, pool: SqlitePool) -> ServerErrorResult<Self> {
        let secret = config
            .session
            .jwt_secret
            .as_deref()
            .unwrap_or_else(|| unreachable!("validate() ensures session.jwt_secret is set"));

        let provider = IdentityProviderClient::new(
            &config.provider.base_url,
            &config.provider.api_key,
            Duration::from_secs(config.provider.timeout_secs),
        )
        .map_err(|e| ServerError::Provider {
            message: e.to_string(),
        })?;

        let login_limiter = LoginRateLimiter::new(mp_auth::RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        Ok(Self {
            pool,
            provider: Arc::new(provider),
            sessions: Arc::new(SessionValidator::with_hs256(secret.as_bytes())),
            login_limiter: Arc::new(login_limiter),
            cookie_name: config.session.cookie_name.clone(),
            public_base_url: config.provider.public_base_url.clone(),
        })
    }
}
