use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication rejected: {reason} {location}")]
    Rejected {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Code exchange rejected: {reason} {location}")]
    CodeRejected {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Rate limited by identity provider {location}")]
    RateLimited { location: ErrorLocation },

    #[error("Session token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Login attempts exceeded: {limit} requests per {window_secs}s {location}")]
    AttemptsExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Identity provider unavailable: {message} {location}")]
    ProviderUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed provider response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
