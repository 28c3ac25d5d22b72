use super::{create_test_store, hours_ago, insert_raw_interacted, stamp};
use crate::{RecordStore as _, StorageError};
use reachlog_core::{FollowingStatus, Provider};

#[test]
fn test_lookup_missing_user() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.lookup_interacted("nobody").unwrap().is_none());
}

#[test]
fn test_first_upsert_creates_row_with_count_one() {
    let (store, _temp_dir) = create_test_store();
    let at = hours_ago(1);

    store
        .upsert_interacted(
            "alice",
            &at,
            FollowingStatus::Followed,
            Some("@bob"),
            Some("blogger-followers"),
            Provider::Interaction,
        )
        .unwrap();

    let user = store.lookup_interacted("alice").unwrap().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.interactions_count, 1);
    assert_eq!(user.following_status, FollowingStatus::Followed);
    assert_eq!(user.last_interaction, stamp(&at));
    assert_eq!(user.source.as_deref(), Some("@bob"));
    assert_eq!(user.interaction_type.as_deref(), Some("blogger-followers"));
    assert_eq!(user.provider, Provider::Interaction);
}

#[test]
fn test_upsert_accumulates_count_and_overwrites_status() {
    let (store, _temp_dir) = create_test_store();

    store
        .upsert_interacted("alice", &hours_ago(5), FollowingStatus::Followed, None, None, Provider::Unknown)
        .unwrap();
    let later = hours_ago(1);
    store
        .upsert_interacted("alice", &later, FollowingStatus::Unfollowed, None, None, Provider::Scraping)
        .unwrap();

    let user = store.lookup_interacted("alice").unwrap().unwrap();
    assert_eq!(user.interactions_count, 2);
    assert_eq!(user.following_status, FollowingStatus::Unfollowed);
    assert_eq!(user.last_interaction, stamp(&later));
    assert_eq!(user.provider, Provider::Scraping);
}

#[test]
fn test_usernames_are_case_sensitive() {
    let (store, _temp_dir) = create_test_store();
    store
        .upsert_interacted("Alice", &hours_ago(1), FollowingStatus::None, None, None, Provider::Unknown)
        .unwrap();

    assert!(store.lookup_interacted("Alice").unwrap().is_some());
    assert!(store.lookup_interacted("alice").unwrap().is_none());
}

#[test]
fn test_zero_count_row_is_returned_as_is() {
    let (store, _temp_dir) = create_test_store();
    insert_raw_interacted(&store, "ghost", 0, "2024-01-01 10:00:00", "none");

    let user = store.lookup_interacted("ghost").unwrap().unwrap();
    assert_eq!(user.interactions_count, 0);
    assert!(!user.was_successful());
}

#[test]
fn test_unknown_stored_status_is_data_corruption() {
    let (store, _temp_dir) = create_test_store();
    insert_raw_interacted(&store, "weird", 1, "2024-01-01 10:00:00", "blocked");

    let err = store.lookup_interacted("weird").unwrap_err();
    assert!(matches!(err, StorageError::DataCorruption { .. }), "got {err:?}");
}

#[test]
fn test_malformed_timestamp_does_not_fail_lookup() {
    let (store, _temp_dir) = create_test_store();
    insert_raw_interacted(&store, "legacy", 2, "01/02/2024", "followed");

    let user = store.lookup_interacted("legacy").unwrap().unwrap();
    assert_eq!(user.following_status, FollowingStatus::Followed);
    assert!(user.last_interaction_at().is_err());
}
