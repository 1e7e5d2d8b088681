use mp_core::{AuthenticatedIdentity, MembershipStatus, PlanTier, RegistrationMetadata};

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn identity(email: &str) -> AuthenticatedIdentity {
    AuthenticatedIdentity::new(Uuid::new_v4(), email)
}

pub fn identity_with_metadata(email: &str) -> AuthenticatedIdentity {
    identity(email).with_metadata(RegistrationMetadata {
        display_name: Some("Test User".to_string()),
        alternate_email: Some("alt@example.com".to_string()),
        discord_handle: Some("tester#1234".to_string()),
        game_username: None,
    })
}

/// Insert a membership row the way the point-of-sale integration would
pub async fn insert_membership(
    pool: &SqlitePool,
    profile_id: Uuid,
    plan: PlanTier,
    status: MembershipStatus,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
            INSERT INTO memberships (
                id, profile_id, plan, status, start_date, expires_at,
                notes, addon_access, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, NULL, 0, ?, NULL)
        "#,
    )
    .bind(id.to_string())
    .bind(profile_id.to_string())
    .bind(plan.as_str())
    .bind(status.as_str())
    .bind(created_at.timestamp_micros())
    .bind(expires_at.timestamp_micros())
    .bind(created_at.timestamp_micros())
    .execute(pool)
    .await
    .expect("Failed to insert membership");

    id
}

pub async fn count_profiles(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .expect("Failed to count profiles")
}
