use crate::{CoreError, PlanTier};

use std::str::FromStr;

#[test]
fn given_tiers_when_compared_then_order_is_basic_premium_ultimate() {
    assert!(PlanTier::Basic < PlanTier::Premium);
    assert!(PlanTier::Premium < PlanTier::Ultimate);
}

#[test]
fn given_known_strings_when_parsed_then_round_trips() {
    for tier in [PlanTier::Basic, PlanTier::Premium, PlanTier::Ultimate] {
        assert_eq!(PlanTier::from_str(tier.as_str()).unwrap(), tier);
    }
}

#[test]
fn given_unknown_string_when_parsed_then_invalid_plan_tier_error() {
    let result = PlanTier::from_str("platinum");

    assert!(matches!(result, Err(CoreError::InvalidPlanTier { .. })));
}
