//! Integration tests for the operator endpoints

mod common;

use crate::common::{
    assert_redirect, body_json, create_test_app_state, date, grant_admin, mint_token,
    seed_membership, seed_profile, send,
};

use mp_core::{MembershipStatus, PlanTier};
use mp_server::build_router;

use axum::http::StatusCode;
use uuid::Uuid;

const DEAD_PROVIDER: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn test_admin_search_without_token_redirects_to_sign_in() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let app = build_router(state);

    let response = send(app, "GET", "/api/v1/admin/users?email=ada", None, None).await;

    assert_redirect(&response, "/login?next=%2Fadmin%2Fusers");
}

#[tokio::test]
async fn test_admin_search_as_non_admin_redirects_to_dashboard() {
    // A current membership does not grant operator access
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let profile_id = seed_profile(&state.pool, identity_id, "member@example.com").await;
    seed_membership(
        &state.pool,
        profile_id,
        PlanTier::Ultimate,
        MembershipStatus::Active,
        date(2099, 1, 1),
    )
    .await;
    let token = mint_token(identity_id, "member@example.com");
    let app = build_router(state);

    let response = send(
        app,
        "GET",
        "/api/v1/admin/users?email=ada",
        Some(&token),
        None,
    )
    .await;

    assert_redirect(&response, "/dashboard");
}

#[tokio::test]
async fn test_admin_search_without_fragment_is_validation_error() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let profile_id = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, profile_id).await;
    let token = mint_token(identity_id, "op@example.com");
    let app = build_router(state);

    let response = send(app, "GET", "/api/v1/admin/users", Some(&token), None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_admin_search_matches_fragment_case_insensitively() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let profile_id = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, profile_id).await;
    seed_profile(&state.pool, Uuid::new_v4(), "Ada.Lovelace@Example.com").await;
    seed_profile(&state.pool, Uuid::new_v4(), "grace@hopper.dev").await;
    let token = mint_token(identity_id, "op@example.com");
    let app = build_router(state);

    let response = send(
        app,
        "GET",
        "/api/v1/admin/users?email=lovelace",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "Ada.Lovelace@Example.com");
}

#[tokio::test]
async fn test_admin_detail_distinguishes_lapsed_from_unknown() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let op_profile = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, op_profile).await;
    let token = mint_token(identity_id, "op@example.com");

    // One user with only an expired membership, one with no history at all
    let lapsed_profile = seed_profile(&state.pool, Uuid::new_v4(), "lapsed@example.com").await;
    seed_membership(
        &state.pool,
        lapsed_profile,
        PlanTier::Basic,
        MembershipStatus::Active,
        date(2020, 1, 1),
    )
    .await;
    let unknown_profile = seed_profile(&state.pool, Uuid::new_v4(), "new@example.com").await;

    let lapsed = body_json(
        send(
            build_router(state.clone()),
            "GET",
            &format!("/api/v1/admin/users/{}", lapsed_profile),
            Some(&token),
            None,
        )
        .await,
    )
    .await;
    let unknown = body_json(
        send(
            build_router(state),
            "GET",
            &format!("/api/v1/admin/users/{}", unknown_profile),
            Some(&token),
            None,
        )
        .await,
    )
    .await;

    assert_eq!(lapsed["standing"]["state"], "lapsed");
    assert_eq!(lapsed["memberships"].as_array().unwrap().len(), 1);
    assert_eq!(unknown["standing"]["state"], "unknown");
    assert_eq!(unknown["memberships"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_admin_detail_includes_membership_history_rows() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let op_profile = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, op_profile).await;
    let token = mint_token(identity_id, "op@example.com");

    let target = seed_profile(&state.pool, Uuid::new_v4(), "member@example.com").await;
    seed_membership(
        &state.pool,
        target,
        PlanTier::Ultimate,
        MembershipStatus::Active,
        date(2099, 1, 1),
    )
    .await;

    let response = send(
        build_router(state),
        "GET",
        &format!("/api/v1/admin/users/{}", target),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "member@example.com");
    assert_eq!(json["standing"]["state"], "current");
    let rows = json["memberships"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["plan"], "ultimate");
    assert_eq!(rows[0]["profile_email"], "member@example.com");
}

#[tokio::test]
async fn test_admin_detail_unknown_id_is_404() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let op_profile = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, op_profile).await;
    let token = mint_token(identity_id, "op@example.com");
    let app = build_router(state);

    let response = send(
        app,
        "GET",
        &format!("/api/v1/admin/users/{}", Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_detail_malformed_id_is_400() {
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let op_profile = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, op_profile).await;
    let token = mint_token(identity_id, "op@example.com");
    let app = build_router(state);

    let response = send(
        app,
        "GET",
        "/api/v1/admin/users/not-a-uuid",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_without_membership_still_gets_access() {
    // Operator access is independent of membership standing
    let state = create_test_app_state(DEAD_PROVIDER).await;
    let identity_id = Uuid::new_v4();
    let op_profile = seed_profile(&state.pool, identity_id, "op@example.com").await;
    grant_admin(&state.pool, op_profile).await;
    let token = mint_token(identity_id, "op@example.com");
    let app = build_router(state);

    let response = send(
        app,
        "GET",
        "/api/v1/admin/users?email=op",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}
