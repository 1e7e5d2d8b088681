//! Members-only handlers, gated on a currently valid membership.

use crate::gate::{self, GateError};
use crate::{ApiError, AppState, EntitlementsResponse, SessionToken};

use mp_core::gate::RouteClass;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/v1/members/entitlements
///
/// Plan tier and addon entitlement of the current membership record.
pub async fn entitlements(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<EntitlementsResponse>, GateError> {
    let passport = gate::evaluate(
        &state,
        RouteClass::Members,
        token.0.as_deref(),
        "/api/v1/members/entitlements",
    )
    .await?;

    // The members route class only proceeds with a current record
    let record = passport
        .standing
        .current_record()
        .ok_or_else(|| GateError::Api(ApiError::Internal {
            message: "Members gate passed without a current record".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }))?;

    Ok(Json(EntitlementsResponse {
        plan: record.plan.as_str().to_string(),
        addon_access: record.addon_access,
        expires_at: record.expires_at.to_rfc3339(),
    }))
}
