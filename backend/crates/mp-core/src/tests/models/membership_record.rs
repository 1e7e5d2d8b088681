use crate::tests::{date, record};
use crate::{MembershipStatus, PlanTier};

#[test]
fn given_active_record_when_checked_at_expiration_then_still_valid() {
    let expires = date(2025, 6, 1);
    let r = record(
        PlanTier::Basic,
        MembershipStatus::Active,
        expires,
        date(2025, 1, 1),
    );

    assert!(r.is_valid_at(expires));
}

#[test]
fn given_inactive_record_when_checked_before_expiration_then_invalid() {
    let r = record(
        PlanTier::Basic,
        MembershipStatus::Inactive,
        date(2099, 1, 1),
        date(2025, 1, 1),
    );

    assert!(!r.is_valid_at(date(2025, 6, 1)));
}

#[test]
fn given_record_without_updates_when_last_updated_then_falls_back_to_created() {
    let created = date(2025, 1, 1);
    let r = record(
        PlanTier::Basic,
        MembershipStatus::Active,
        date(2026, 1, 1),
        created,
    );

    assert_eq!(r.last_updated(), created);
}

#[test]
fn given_updated_record_when_last_updated_then_returns_update_time() {
    let mut r = record(
        PlanTier::Basic,
        MembershipStatus::Active,
        date(2026, 1, 1),
        date(2025, 1, 1),
    );
    r.updated_at = Some(date(2025, 3, 1));

    assert_eq!(r.last_updated(), date(2025, 3, 1));
}
