//! Profile repository: identity resolution and operator lookups.
//!
//! ## One profile per external identity
//!
//! `resolve` is the ONLY code path that creates profiles. Creation happens
//! through a single `INSERT .. ON CONFLICT(identity_id) DO UPDATE` statement,
//! so two concurrent callback completions for the same identity cannot
//! produce two rows: the loser of the race lands on the conflict clause and
//! converges on the row the winner created. There is deliberately no
//! read-then-insert window.
//!
//! Metadata merges use `COALESCE(excluded.col, col)`: a field overwrites
//! only when the incoming identity actually carries it, which also makes a
//! replayed confirmation link a no-op.

use crate::repositories::row;
use crate::{DbError, Result as DbErrorResult};

use mp_core::{AuthenticatedIdentity, ErrorLocation, Profile};

use std::panic::Location;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_PROFILE: &str = r#"
    SELECT id, identity_id, email, display_name, alternate_email,
        discord_handle, game_username, created_at, updated_at
    FROM profiles
"#;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find-or-create the one profile for an authenticated identity.
    ///
    /// An existing profile holding the same login email under a *different*
    /// identity id is never merged; that surfaces as `ProfileConflict` and
    /// needs manual resolution.
    pub async fn resolve(&self, identity: &AuthenticatedIdentity) -> DbErrorResult<Profile> {
        let identity_id = identity.id.to_string();

        // Same login email under another identity: refuse to guess which
        // account the user meant.
        let claimed = sqlx::query("SELECT id FROM profiles WHERE email = ? AND identity_id != ?")
            .bind(&identity.email)
            .bind(&identity_id)
            .fetch_optional(&self.pool)
            .await?;

        if claimed.is_some() {
            return Err(DbError::ProfileConflict {
                email: identity.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now().timestamp_micros();
        let new_id = Uuid::new_v4().to_string();
        let meta = &identity.metadata;

        sqlx::query(
            r#"
                INSERT INTO profiles (
                    id, identity_id, email, display_name, alternate_email,
                    discord_handle, game_username, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(identity_id) DO UPDATE SET
                    email = excluded.email,
                    display_name = COALESCE(excluded.display_name, display_name),
                    alternate_email = COALESCE(excluded.alternate_email, alternate_email),
                    discord_handle = COALESCE(excluded.discord_handle, discord_handle),
                    game_username = COALESCE(excluded.game_username, game_username),
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&new_id)
        .bind(&identity_id)
        .bind(&identity.email)
        .bind(&meta.display_name)
        .bind(&meta.alternate_email)
        .bind(&meta.discord_handle)
        .bind(&meta.game_username)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(&format!("{} WHERE identity_id = ?", SELECT_PROFILE))
            .bind(&identity_id)
            .fetch_one(&self.pool)
            .await?;

        row::profile_from_row(&row)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let id_str = id.to_string();

        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_PROFILE))
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row::profile_from_row(&r)).transpose()
    }

    pub async fn find_by_identity(&self, identity_id: Uuid) -> DbErrorResult<Option<Profile>> {
        let identity_id_str = identity_id.to_string();

        let row = sqlx::query(&format!("{} WHERE identity_id = ?", SELECT_PROFILE))
            .bind(&identity_id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row::profile_from_row(&r)).transpose()
    }

    /// Case-insensitive substring search over login emails, newest-created
    /// first. Each call is a fresh query: pagination restarts cleanly and
    /// never cursors over mutable state.
    pub async fn search_by_email(
        &self,
        fragment: &str,
        limit: i64,
        offset: i64,
    ) -> DbErrorResult<Vec<Profile>> {
        let pattern = format!("%{}%", fragment);

        let rows = sqlx::query(&format!(
            "{} WHERE email LIKE ? ORDER BY created_at DESC, id LIMIT ? OFFSET ?",
            SELECT_PROFILE
        ))
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row::profile_from_row).collect()
    }

    /// Persist the self-service editable fields (contact details and
    /// handles). The identity key and login email are not touched here.
    pub async fn update_contact(&self, profile: &Profile) -> DbErrorResult<()> {
        let id = profile.id.to_string();
        let updated_at = profile.updated_at.timestamp_micros();

        sqlx::query(
            r#"
                UPDATE profiles
                SET display_name = ?, alternate_email = ?, discord_handle = ?,
                    game_username = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&profile.display_name)
        .bind(&profile.alternate_email)
        .bind(&profile.discord_handle)
        .bind(&profile.game_username)
        .bind(updated_at)
        .bind(&id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
