use crate::ApiError;

use mp_auth::AuthError;
use mp_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use error_location::ErrorLocation;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn given_auth_failed_then_401() {
    let error = ApiError::AuthFailed {
        message: "bad credentials".to_string(),
        location: location(),
    };

    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}

#[test]
fn given_conflict_then_409() {
    let error = ApiError::Conflict {
        message: "duplicate".to_string(),
        location: location(),
    };

    assert_eq!(error.status_code(), StatusCode::CONFLICT);
}

#[test]
fn given_unavailable_then_503() {
    let error = ApiError::Unavailable {
        message: "down".to_string(),
        location: location(),
    };

    assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn given_provider_rejection_when_converted_then_auth_failed_with_reason() {
    let error = ApiError::from(AuthError::Rejected {
        reason: "Invalid login credentials".to_string(),
        location: location(),
    });

    assert!(matches!(
        error,
        ApiError::AuthFailed { ref message, .. } if message == "Invalid login credentials"
    ));
}

#[test]
fn given_provider_outage_when_converted_then_unavailable() {
    let error = ApiError::from(AuthError::ProviderUnavailable {
        message: "request timed out".to_string(),
        location: location(),
    });

    assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn given_throttle_when_converted_then_rate_limited() {
    let error = ApiError::from(AuthError::AttemptsExceeded {
        limit: 10,
        window_secs: 60,
        location: location(),
    });

    assert_eq!(error.status_code(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn given_profile_conflict_when_converted_then_409_conflict() {
    let error = ApiError::from(DbError::ProfileConflict {
        email: "ada@example.com".to_string(),
        location: location(),
    });

    assert_eq!(error.status_code(), StatusCode::CONFLICT);
}
