//! Operator handlers: user search and detail view.
//!
//! Read-only over memberships. The point-of-sale integration is the single
//! authoritative writer of membership rows, so nothing here mutates them.

use crate::gate::{self, GateError};
use crate::{
    ApiError, AppState, SearchUsersQuery, SessionToken, StandingDto, UserDetailResponse,
    UserListResponse,
};

use mp_core::gate::RouteClass;
use mp_core::standing;
use mp_db::{MembershipRepository, ProfileRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/admin/users?email=&limit=&offset=
///
/// Case-insensitive substring search over login emails, newest-created
/// first. Each call is a fresh, restartable query.
pub async fn search_users(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<SearchUsersQuery>,
) -> Result<Json<UserListResponse>, GateError> {
    gate::evaluate(
        &state,
        RouteClass::Admin,
        token.0.as_deref(),
        "/admin/users",
    )
    .await?;

    let fragment = query.email.as_deref().map(str::trim).unwrap_or_default();
    if fragment.is_empty() {
        return Err(GateError::Api(ApiError::Validation {
            message: "email search fragment is required".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }));
    }

    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0).max(0);

    let profiles = ProfileRepository::new(state.pool.clone())
        .search_by_email(fragment, limit, offset)
        .await
        .map_err(GateError::from)?;

    Ok(Json(UserListResponse {
        users: profiles.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/admin/users/{id}
///
/// Profile detail with full membership history and derived standing.
pub async fn get_user_detail(
    State(state): State<AppState>,
    token: SessionToken,
    Path(id): Path<String>,
) -> Result<Json<UserDetailResponse>, GateError> {
    gate::evaluate(
        &state,
        RouteClass::Admin,
        token.0.as_deref(),
        "/admin/users",
    )
    .await?;

    let profile_id = Uuid::parse_str(&id).map_err(ApiError::from)?;

    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_id(profile_id)
        .await
        .map_err(GateError::from)?
        .ok_or_else(|| {
            GateError::Api(ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            })
        })?;

    let memberships = MembershipRepository::new(state.pool.clone());

    // Standing runs over raw records; the view rows are display only
    let records = memberships
        .find_by_profile(profile.id)
        .await
        .map_err(GateError::from)?;
    let current = standing::derive(&records, Utc::now());

    let overview = memberships
        .overview_for_profile(profile.id)
        .await
        .map_err(GateError::from)?;

    Ok(Json(UserDetailResponse {
        user: profile.into(),
        memberships: overview.into_iter().map(Into::into).collect(),
        standing: StandingDto::from(&current),
    }))
}
