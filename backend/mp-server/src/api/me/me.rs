//! Current-user handlers: dashboard payload and self-service profile edit.

use crate::gate::{self, GateError};
use crate::{AppState, MeResponse, SessionToken, StandingDto, UpdateProfileRequest};

use mp_core::gate::RouteClass;
use mp_db::ProfileRepository;

use axum::{
    Json,
    extract::State,
};
use chrono::Utc;

/// GET /api/v1/me
///
/// The signed-in user's profile plus derived membership standing.
pub async fn get_me(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<MeResponse>, GateError> {
    let passport = gate::evaluate(
        &state,
        RouteClass::Dashboard,
        token.0.as_deref(),
        "/api/v1/me",
    )
    .await?;

    Ok(Json(MeResponse {
        membership: StandingDto::from(&passport.standing),
        profile: passport.profile.into(),
    }))
}

/// PUT /api/v1/me/profile
///
/// Update the signed-in user's contact details and handles.
pub async fn update_profile(
    State(state): State<AppState>,
    token: SessionToken,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<MeResponse>, GateError> {
    let passport = gate::evaluate(
        &state,
        RouteClass::Dashboard,
        token.0.as_deref(),
        "/api/v1/me/profile",
    )
    .await?;

    let mut profile = passport.profile;
    request.apply_to(&mut profile);
    profile.updated_at = Utc::now();

    ProfileRepository::new(state.pool.clone())
        .update_contact(&profile)
        .await
        .map_err(GateError::from)?;

    log::debug!("Profile {} updated by owner", profile.id);

    Ok(Json(MeResponse {
        membership: StandingDto::from(&passport.standing),
        profile: profile.into(),
    }))
}
