mod membership_record;
mod plan_tier;
mod profile;
