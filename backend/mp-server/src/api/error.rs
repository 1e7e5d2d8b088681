//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes. Authorization-scope failures are NOT here: the gate turns
//! those into redirects, not error bodies.

use mp_auth::AuthError;
use mp_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "AUTH_FAILED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credential or session rejected (401)
    #[error("Authentication failed: {message} {location}")]
    AuthFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Too many attempts, locally or at the provider (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Duplicate-email-different-identity; never auto-merged (409)
    #[error("Profile conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Identity provider or data store is unreachable (503).
    /// Safe to retry from the client; the server itself never retries.
    #[error("Upstream unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AuthFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status_code();
        let body = match self {
            ApiError::AuthFailed { message, .. } => ApiErrorBody {
                code: "AUTH_FAILED".into(),
                message,
                field: None,
            },
            ApiError::RateLimited { message, .. } => ApiErrorBody {
                code: "RATE_LIMITED".into(),
                message,
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "PROFILE_CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Unavailable { message, .. } => ApiErrorBody {
                code: "UPSTREAM_UNAVAILABLE".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            sqlx::Error::PoolTimedOut => ApiError::Unavailable {
                message: "Data store timed out".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        match e {
            DbError::ProfileConflict { email, .. } => ApiError::Conflict {
                message: format!(
                    "{} is already registered under a different sign-in; contact support",
                    email
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::RowNotFound => ApiError::NotFound {
                    message: "Resource not found".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                sqlx::Error::PoolTimedOut => ApiError::Unavailable {
                    message: "Data store timed out".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            },
            DbError::Migration { message, .. } | DbError::Initialization { message, .. } => {
                ApiError::Internal {
                    message: format!("Database error: {}", message),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert identity provider / session errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Rejected { reason, .. } | AuthError::CodeRejected { reason, .. } => {
                ApiError::AuthFailed {
                    message: reason,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::TokenExpired { .. } => ApiError::AuthFailed {
                message: "Session expired".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::JwtDecode { .. } | AuthError::InvalidClaim { .. } => ApiError::AuthFailed {
                message: "Invalid session token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::RateLimited { .. } => ApiError::RateLimited {
                message: "Identity provider is rate limiting requests".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::AttemptsExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!("Too many attempts ({} per {}s); try again later", limit, window_secs),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::ProviderUnavailable { message, .. } => ApiError::Unavailable {
                message: format!("Identity provider unavailable: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MalformedResponse { message, .. } => ApiError::Internal {
                message: format!("Unexpected identity provider response: {}", message),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
