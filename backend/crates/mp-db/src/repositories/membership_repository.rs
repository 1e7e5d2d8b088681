//! Membership repository.
//!
//! Read-only on purpose: membership rows are written by the external
//! point-of-sale integration, which stays the single authoritative writer.

use crate::Result as DbErrorResult;
use crate::repositories::row;

use mp_core::{MembershipOverview, MembershipRecord};

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct MembershipRepository {
    pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Raw records for a profile, newest first. Standing derivation runs
    /// over these, never over the display view.
    pub async fn find_by_profile(&self, profile_id: Uuid) -> DbErrorResult<Vec<MembershipRecord>> {
        let profile_id_str = profile_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, profile_id, plan, status, start_date, expires_at,
                    notes, addon_access, created_at, updated_at
                FROM memberships
                WHERE profile_id = ?
                ORDER BY created_at DESC, id
            "#,
        )
        .bind(&profile_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row::membership_from_row).collect()
    }

    /// Joined display rows from the `membership_overview` view, newest
    /// first. Display only.
    pub async fn overview_for_profile(
        &self,
        profile_id: Uuid,
    ) -> DbErrorResult<Vec<MembershipOverview>> {
        let profile_id_str = profile_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT id, profile_id, profile_email, profile_display_name,
                    plan, status, start_date, expires_at, notes, addon_access,
                    created_at, updated_at
                FROM membership_overview
                WHERE profile_id = ?
                ORDER BY created_at DESC, id
            "#,
        )
        .bind(&profile_id_str)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row::overview_from_row).collect()
    }
}
