//! Authentication flow handlers.
//!
//! The callback is the single entry point the provider redirects into after
//! a confirmation link. The pipeline is strictly ordered: the code exchange
//! must yield an identity before the profile resolves, and resolution must
//! finish before anything derives standing. Failures redirect back to
//! sign-in with `next` preserved; nothing here retries.

use crate::api::auth::session_response::PasswordlessResponse;
use crate::{ApiError, ApiResult, AppState};
use crate::{PasswordLoginRequest, PasswordlessRequest, SessionResponse};

use mp_db::{DbError, ProfileRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use error_location::ErrorLocation;
use serde::Deserialize;

const DEFAULT_NEXT: &str = "/dashboard";

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub next: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/password
///
/// Password sign-in: throttle, authenticate against the provider, then make
/// sure the durable profile exists before handing the session back.
pub async fn password_login(
    State(state): State<AppState>,
    Json(request): Json<PasswordLoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let email = request.email.trim();

    if email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation {
            message: "email and password are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    state.login_limiter.check(email)?;

    let session = state.provider.password_grant(email, &request.password).await?;

    let profile = ProfileRepository::new(state.pool.clone())
        .resolve(&session.identity)
        .await?;

    Ok(Json(SessionResponse {
        access_token: session.access_token,
        profile: profile.into(),
    }))
}

/// POST /api/v1/auth/passwordless
///
/// Ask the provider to email a single-use sign-in link. The link lands on
/// GET /auth/callback, which finishes the flow.
pub async fn request_passwordless(
    State(state): State<AppState>,
    Json(request): Json<PasswordlessRequest>,
) -> ApiResult<(StatusCode, Json<PasswordlessResponse>)> {
    let email = request.email.trim();

    if email.is_empty() {
        return Err(ApiError::Validation {
            message: "email is required".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let redirect_to = callback_url(&state.public_base_url, request.next.as_deref());
    state
        .provider
        .request_passwordless(email, Some(&redirect_to))
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(PasswordlessResponse {
            message: "Confirmation link sent; check your email".to_string(),
        }),
    ))
}

/// GET /auth/callback?code=...&next=...
///
/// Code exchange -> profile resolution -> redirect to `next`. On success the
/// session token travels back as a cookie so browser navigation stays
/// signed in.
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let next = sanitize_next(query.next.as_deref());

    let Some(code) = query.code.as_deref().filter(|code| !code.is_empty()) else {
        log::warn!("Callback invoked without a code");
        return sign_in_with_error(&next, "auth");
    };

    let session = match state.provider.exchange_code(code).await {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Code exchange failed: {}", e);
            return sign_in_with_error(&next, "auth");
        }
    };

    match ProfileRepository::new(state.pool.clone())
        .resolve(&session.identity)
        .await
    {
        Ok(profile) => {
            log::info!(
                "Callback resolved profile {} for identity {}",
                profile.id,
                session.identity.id
            );

            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                state.cookie_name, session.access_token
            );
            (
                AppendHeaders([(SET_COOKIE, cookie)]),
                Redirect::to(&next),
            )
                .into_response()
        }
        Err(DbError::ProfileConflict { email, .. }) => {
            log::warn!("Callback hit a profile conflict for {}", email);
            sign_in_with_error(&next, "conflict")
        }
        Err(e) => {
            log::error!("Profile resolution failed during callback: {}", e);
            sign_in_with_error(&next, "unavailable")
        }
    }
}

/// POST /auth/signout
///
/// Clear the session cookie. The provider-side session expires on its own.
pub async fn signout(State(state): State<AppState>) -> Response {
    let cookie = format!(
        "{}=; Path=/; HttpOnly; Max-Age=0; SameSite=Lax",
        state.cookie_name
    );

    (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/login")).into_response()
}

// =============================================================================
// Helpers
// =============================================================================

/// Only same-site absolute paths may be redirect targets; anything else
/// falls back to the dashboard.
pub(crate) fn sanitize_next(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => DEFAULT_NEXT.to_string(),
    }
}

/// Callback URL handed to the provider for the emailed link.
pub(crate) fn callback_url(public_base_url: &str, next: Option<&str>) -> String {
    let base = public_base_url.trim_end_matches('/');
    match next {
        Some(path) => format!("{}/auth/callback?next={}", base, urlencoding::encode(path)),
        None => format!("{}/auth/callback", base),
    }
}

fn sign_in_with_error(next: &str, error: &str) -> Response {
    Redirect::to(&format!(
        "/login?next={}&error={}",
        urlencoding::encode(next),
        error
    ))
    .into_response()
}
