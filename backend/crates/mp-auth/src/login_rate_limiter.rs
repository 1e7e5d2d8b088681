use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};

/// Per-email throttle on password attempts.
///
/// Checked before the provider call so a credential-stuffing loop burns out
/// locally instead of tripping the provider's account lockout.
pub struct LoginRateLimiter {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests / config.window_secs.max(1) as u32)
                .unwrap_or(NonZeroU32::new(1).unwrap()),
        );

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Check if an attempt for this email is allowed, error if throttled
    #[track_caller]
    pub fn check(&self, email: &str) -> AuthErrorResult<()> {
        let key = email.trim().to_ascii_lowercase();

        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::AttemptsExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
