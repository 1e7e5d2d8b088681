use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identity provider redirect target + session teardown
        .route("/auth/callback", get(api::auth::auth::callback))
        .route("/auth/signout", post(api::auth::auth::signout))
        // Authentication API
        .route("/api/v1/auth/password", post(api::auth::auth::password_login))
        .route(
            "/api/v1/auth/passwordless",
            post(api::auth::auth::request_passwordless),
        )
        // Signed-in user
        .route("/api/v1/me", get(api::me::me::get_me))
        .route("/api/v1/me/profile", put(api::me::me::update_profile))
        .route(
            "/api/v1/members/entitlements",
            get(api::members::members::entitlements),
        )
        // Operator area
        .route("/api/v1/admin/users", get(api::admin::admin::search_users))
        .route(
            "/api/v1/admin/users/{id}",
            get(api::admin::admin::get_user_detail),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
