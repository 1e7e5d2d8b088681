//! Row decoding helpers shared by the repositories.
//!
//! Queries use the runtime API, so every column is pulled out by name and
//! converted into domain types by hand; anything that does not parse is an
//! `Initialization` error naming the offending column.

use crate::{DbError, Result as DbErrorResult};

use mp_core::{
    ErrorLocation, MembershipOverview, MembershipRecord, MembershipStatus, PlanTier, Profile,
};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_micros(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(value).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn profile_from_row(row: &SqliteRow) -> DbErrorResult<Profile> {
    let id: String = row.try_get("id")?;
    let identity_id: String = row.try_get("identity_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Profile {
        id: parse_uuid(&id, "profiles.id")?,
        identity_id: parse_uuid(&identity_id, "profiles.identity_id")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        alternate_email: row.try_get("alternate_email")?,
        discord_handle: row.try_get("discord_handle")?,
        game_username: row.try_get("game_username")?,
        created_at: parse_micros(created_at, "profiles.created_at")?,
        updated_at: parse_micros(updated_at, "profiles.updated_at")?,
    })
}

#[track_caller]
fn parse_plan(value: &str) -> DbErrorResult<PlanTier> {
    PlanTier::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid plan tier in memberships.plan: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_status(value: &str) -> DbErrorResult<MembershipStatus> {
    MembershipStatus::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid status in memberships.status: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn membership_from_row(row: &SqliteRow) -> DbErrorResult<MembershipRecord> {
    let id: String = row.try_get("id")?;
    let profile_id: String = row.try_get("profile_id")?;
    let plan: String = row.try_get("plan")?;
    let status: String = row.try_get("status")?;
    let start_date: i64 = row.try_get("start_date")?;
    let expires_at: i64 = row.try_get("expires_at")?;
    let addon_access: bool = row.try_get("addon_access")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: Option<i64> = row.try_get("updated_at")?;

    Ok(MembershipRecord {
        id: parse_uuid(&id, "memberships.id")?,
        profile_id: parse_uuid(&profile_id, "memberships.profile_id")?,
        plan: parse_plan(&plan)?,
        status: parse_status(&status)?,
        start_date: parse_micros(start_date, "memberships.start_date")?,
        expires_at: parse_micros(expires_at, "memberships.expires_at")?,
        notes: row.try_get("notes")?,
        addon_access,
        created_at: parse_micros(created_at, "memberships.created_at")?,
        updated_at: updated_at
            .map(|value| parse_micros(value, "memberships.updated_at"))
            .transpose()?,
    })
}

pub(crate) fn overview_from_row(row: &SqliteRow) -> DbErrorResult<MembershipOverview> {
    let id: String = row.try_get("id")?;
    let profile_id: String = row.try_get("profile_id")?;
    let plan: String = row.try_get("plan")?;
    let status: String = row.try_get("status")?;
    let start_date: i64 = row.try_get("start_date")?;
    let expires_at: i64 = row.try_get("expires_at")?;
    let addon_access: bool = row.try_get("addon_access")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: Option<i64> = row.try_get("updated_at")?;

    Ok(MembershipOverview {
        id: parse_uuid(&id, "membership_overview.id")?,
        profile_id: parse_uuid(&profile_id, "membership_overview.profile_id")?,
        profile_email: row.try_get("profile_email")?,
        profile_display_name: row.try_get("profile_display_name")?,
        plan: parse_plan(&plan)?,
        status: parse_status(&status)?,
        start_date: parse_micros(start_date, "membership_overview.start_date")?,
        expires_at: parse_micros(expires_at, "membership_overview.expires_at")?,
        notes: row.try_get("notes")?,
        addon_access,
        created_at: parse_micros(created_at, "membership_overview.created_at")?,
        updated_at: updated_at
            .map(|value| parse_micros(value, "membership_overview.updated_at"))
            .transpose()?,
    })
}
