#![allow(dead_code)]

//! Test infrastructure for mp-server API tests

use mp_auth::{IdentityProviderClient, LoginRateLimiter, RateLimitConfig, SessionValidator};
use mp_core::{MembershipStatus, PlanTier};
use mp_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789";
pub const COOKIE_NAME: &str = "mp_session";

/// Create a test pool with in-memory SQLite.
/// Single connection: every pooled connection would otherwise get its own
/// empty in-memory database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    mp_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing; `provider_url` points at a wiremock server
/// (or a dead address for tests that never touch the provider)
pub async fn create_test_app_state(provider_url: &str) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        provider: Arc::new(
            IdentityProviderClient::new(provider_url, "test-api-key", Duration::from_secs(2))
                .expect("Failed to build provider client"),
        ),
        sessions: Arc::new(SessionValidator::with_hs256(TEST_SECRET)),
        login_limiter: Arc::new(LoginRateLimiter::new(RateLimitConfig {
            max_requests: 1000,
            window_secs: 1,
        })),
        cookie_name: COOKIE_NAME.to_string(),
        public_base_url: "http://127.0.0.1:8000".to_string(),
    }
}

/// Mint a session token the way the provider would
pub fn mint_token(identity_id: Uuid, email: &str) -> String {
    let claims = serde_json::json!({
        "sub": identity_id.to_string(),
        "email": email,
        "exp": Utc::now().timestamp() + 3600,
        "iat": Utc::now().timestamp(),
    });

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to mint test token")
}

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Insert a profile row directly, bypassing the resolver
pub async fn seed_profile(pool: &SqlitePool, identity_id: Uuid, email: &str) -> Uuid {
    let profile_id = Uuid::new_v4();
    let now = Utc::now().timestamp_micros();

    sqlx::query(
        r#"
            INSERT INTO profiles (id, identity_id, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(profile_id.to_string())
    .bind(identity_id.to_string())
    .bind(email)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to seed profile");

    profile_id
}

/// Insert a membership row the way the point-of-sale integration would
pub async fn seed_membership(
    pool: &SqlitePool,
    profile_id: Uuid,
    plan: PlanTier,
    status: MembershipStatus,
    expires_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::new_v4();
    let created_at = Utc::now().timestamp_micros();

    sqlx::query(
        r#"
            INSERT INTO memberships (
                id, profile_id, plan, status, start_date, expires_at,
                notes, addon_access, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, NULL, 1, ?, NULL)
        "#,
    )
    .bind(id.to_string())
    .bind(profile_id.to_string())
    .bind(plan.as_str())
    .bind(status.as_str())
    .bind(created_at)
    .bind(expires_at.timestamp_micros())
    .bind(created_at)
    .execute(pool)
    .await
    .expect("Failed to seed membership");

    id
}

pub async fn grant_admin(pool: &SqlitePool, profile_id: Uuid) {
    sqlx::query("INSERT INTO admin_grants (profile_id, granted_at) VALUES (?, ?)")
        .bind(profile_id.to_string())
        .bind(Utc::now().timestamp_micros())
        .execute(pool)
        .await
        .expect("Failed to grant admin");
}

pub async fn count_profiles(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .expect("Failed to count profiles")
}

/// Fire a request at the router, optionally with a bearer token
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location_header(response: &Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("expected a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn assert_redirect(response: &Response<axum::body::Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location_header(response), to);
}
