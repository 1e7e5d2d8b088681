//! Admin grant repository.
//!
//! Operator privileges live in their own table rather than on the profile:
//! a profile either appears in the grant list or it does not. Grants are
//! managed operationally; no HTTP route writes them.

use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct AdminGrantRepository {
    pool: SqlitePool,
}

impl AdminGrantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn is_admin(&self, profile_id: Uuid) -> DbErrorResult<bool> {
        let profile_id_str = profile_id.to_string();

        let row = sqlx::query("SELECT profile_id FROM admin_grants WHERE profile_id = ?")
            .bind(&profile_id_str)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    pub async fn grant(&self, profile_id: Uuid) -> DbErrorResult<()> {
        let profile_id_str = profile_id.to_string();
        let granted_at = Utc::now().timestamp_micros();

        sqlx::query("INSERT OR IGNORE INTO admin_grants (profile_id, granted_at) VALUES (?, ?)")
            .bind(&profile_id_str)
            .bind(granted_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn revoke(&self, profile_id: Uuid) -> DbErrorResult<()> {
        let profile_id_str = profile_id.to_string();

        sqlx::query("DELETE FROM admin_grants WHERE profile_id = ?")
            .bind(&profile_id_str)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
