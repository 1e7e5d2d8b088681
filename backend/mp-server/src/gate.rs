//! Per-request authorization.
//!
//! Drives the pure gate state machine from the session token and the data
//! store. Each request walks the full chain - authenticate, resolve the
//! profile, derive standing, check the admin grant - and either hands the
//! handler a `Passport` or redirects. The resolver call here is the same
//! find-or-create used by the auth flows, so the chain stays idempotent
//! when a request arrives before the callback finished writing.

use crate::api::error::ApiError;
use crate::state::AppState;

use mp_core::gate::{GateDecision, GateState, RouteClass, Scope};
use mp_core::{MembershipStanding, Profile, standing};
use mp_db::{AdminGrantRepository, DbError, MembershipRepository, ProfileRepository};

use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;

/// Everything a handler needs once the gate lets a request through.
pub struct Passport {
    pub profile: Profile,
    pub standing: MembershipStanding,
    pub scope: Scope,
}

/// Denied requests leave the gate as redirects; infrastructure failures as
/// API errors. Both render straight into a response.
#[derive(Debug)]
pub enum GateError {
    Redirect(String),
    Api(ApiError),
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        match self {
            GateError::Redirect(to) => Redirect::to(&to).into_response(),
            GateError::Api(error) => error.into_response(),
        }
    }
}

impl From<ApiError> for GateError {
    fn from(error: ApiError) -> Self {
        GateError::Api(error)
    }
}

impl From<DbError> for GateError {
    fn from(error: DbError) -> Self {
        GateError::Api(error.into())
    }
}

/// Build the sign-in redirect carrying the originally requested path.
pub fn sign_in_redirect(next: &str) -> String {
    format!("/login?next={}", urlencoding::encode(next))
}

/// Evaluate the gate for one request.
///
/// Authentication and resolution failures land back at sign-in with the
/// requested path preserved; scope failures land on the user dashboard.
/// Store outages are surfaced as errors instead of redirect loops.
pub async fn evaluate(
    state: &AppState,
    route: RouteClass,
    token: Option<&str>,
    requested_path: &str,
) -> Result<Passport, GateError> {
    let mut machine = GateState::new();

    match state.sessions.current_identity(token) {
        Ok(Some(identity)) => {
            machine = machine.authenticated(identity);
        }
        Ok(None) => {}
        Err(e) => {
            // Bad or expired token: treat as anonymous, never as a 500
            log::debug!("Session token rejected: {}", e);
        }
    }

    if let Some(identity) = machine.identity().cloned() {
        match ProfileRepository::new(state.pool.clone()).resolve(&identity).await {
            Ok(profile) => {
                let records = MembershipRepository::new(state.pool.clone())
                    .find_by_profile(profile.id)
                    .await?;
                let standing = standing::derive(&records, Utc::now());
                let is_admin = AdminGrantRepository::new(state.pool.clone())
                    .is_admin(profile.id)
                    .await?;

                machine = machine.profile_resolved(profile, standing, is_admin);
            }
            Err(DbError::ProfileConflict { email, .. }) => {
                // Resolution failed on this identity: back through sign-in
                log::warn!("Profile conflict during gating for {}", email);
                machine = GateState::new();
            }
            Err(e) => return Err(e.into()),
        }
    }

    match machine.authorize(route, requested_path) {
        GateDecision::Proceed(scope) => match machine {
            GateState::ProfileResolved {
                profile, standing, ..
            } => Ok(Passport {
                profile,
                standing,
                scope,
            }),
            // Public routes can pass without a resolved profile; handlers on
            // them must not ask for a passport
            _ => Err(GateError::Api(ApiError::Internal {
                message: "Gate proceeded without a resolved profile".to_string(),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            })),
        },
        GateDecision::SignIn { next } => Err(GateError::Redirect(sign_in_redirect(&next))),
        GateDecision::Dashboard => Err(GateError::Redirect("/dashboard".to_string())),
    }
}
