use crate::{Profile, RegistrationMetadata};

use uuid::Uuid;

fn metadata() -> RegistrationMetadata {
    RegistrationMetadata {
        display_name: Some("Ada Lovelace".to_string()),
        alternate_email: Some("ada@backup.example.com".to_string()),
        discord_handle: None,
        game_username: Some("ada42".to_string()),
    }
}

#[test]
fn given_metadata_when_applied_then_present_fields_overwrite() {
    let mut profile = Profile::new(Uuid::new_v4(), "ada@example.com");

    let changed = profile.apply_metadata(&metadata());

    assert!(changed);
    assert_eq!(profile.display_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(profile.game_username.as_deref(), Some("ada42"));
}

#[test]
fn given_metadata_when_applied_then_absent_fields_left_untouched() {
    let mut profile = Profile::new(Uuid::new_v4(), "ada@example.com");
    profile.discord_handle = Some("ada#0001".to_string());

    profile.apply_metadata(&metadata());

    // discord_handle was absent from the metadata, so the stored value stays
    assert_eq!(profile.discord_handle.as_deref(), Some("ada#0001"));
}

#[test]
fn given_same_metadata_when_applied_twice_then_second_apply_is_a_no_op() {
    let mut profile = Profile::new(Uuid::new_v4(), "ada@example.com");

    assert!(profile.apply_metadata(&metadata()));
    let after_first = profile.clone();

    let changed_again = profile.apply_metadata(&metadata());

    assert!(!changed_again);
    assert_eq!(profile, after_first);
}

#[test]
fn given_empty_metadata_when_applied_then_nothing_changes() {
    let mut profile = Profile::new(Uuid::new_v4(), "ada@example.com");
    let before = profile.clone();

    let changed = profile.apply_metadata(&RegistrationMetadata::default());

    assert!(!changed);
    assert_eq!(profile, before);
}
