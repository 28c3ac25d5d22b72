use super::{create_test_store, hours_ago, stamp};
use crate::{RecordStore as _, SqliteStore, StoreStats};
use reachlog_core::{FollowingStatus, Provider, ScrapingStatus};
use tempfile::TempDir;

#[test]
fn test_scraped_upsert_overwrites_status() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.lookup_scraped("carol").unwrap().is_none());

    store.upsert_scraped("carol", &hours_ago(3), ScrapingStatus::NotScraped).unwrap();
    let first = store.lookup_scraped("carol").unwrap().unwrap();
    assert_eq!(first.scraping_status, ScrapingStatus::NotScraped);

    let later = hours_ago(1);
    store.upsert_scraped("carol", &later, ScrapingStatus::Scraped).unwrap();
    let second = store.lookup_scraped("carol").unwrap().unwrap();
    assert_eq!(second.scraping_status, ScrapingStatus::Scraped);
    assert_eq!(second.last_interaction, stamp(&later));
}

#[test]
fn test_filtered_upsert_refreshes_timestamp() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.lookup_filtered("dave").unwrap().is_none());

    store.upsert_filtered("dave", &hours_ago(10)).unwrap();
    let later = hours_ago(2);
    store.upsert_filtered("dave", &later).unwrap();

    let user = store.lookup_filtered("dave").unwrap().unwrap();
    assert_eq!(user.filtered_at, stamp(&later));
    assert_eq!(store.stats().unwrap().filtered_users, 1);
}

#[test]
fn test_stats_counts_each_kind() {
    let (store, _temp_dir) = create_test_store();
    assert_eq!(store.stats().unwrap(), StoreStats::default());

    let now = hours_ago(0);
    store.upsert_interacted("a", &now, FollowingStatus::None, None, None, Provider::Unknown).unwrap();
    store.upsert_interacted("b", &now, FollowingStatus::None, None, None, Provider::Unknown).unwrap();
    store.upsert_scraped("a", &now, ScrapingStatus::Scraped).unwrap();
    store.upsert_filtered("c", &now).unwrap();
    store.enqueue_targets(&["x", "y", "z"], Provider::TargetsList, None, None).unwrap();

    assert_eq!(
        store.stats().unwrap(),
        StoreStats { interacted_users: 2, scraped_users: 1, filtered_users: 1, pending_targets: 3 }
    );
}

#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let store = SqliteStore::open_account(temp_dir.path(), "me").unwrap();
        store
            .upsert_interacted("alice", &hours_ago(1), FollowingStatus::Followed, None, None, Provider::Unknown)
            .unwrap();
        store.enqueue_targets(&["t1"], Provider::TargetsList, None, None).unwrap();
    }

    let reopened = SqliteStore::open_account(temp_dir.path(), "me").unwrap();
    assert!(reopened.path().ends_with("me/reachlog.db"));
    assert_eq!(
        reopened.lookup_interacted("alice").unwrap().unwrap().following_status,
        FollowingStatus::Followed
    );
    assert_eq!(reopened.dequeue_next_target(&[]).unwrap().unwrap().username, "t1");
}

#[test]
fn test_accounts_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let mine = SqliteStore::open_account(temp_dir.path(), "me").unwrap();
    let other = SqliteStore::open_account(temp_dir.path(), "other").unwrap();

    mine.upsert_filtered("spam", &hours_ago(0)).unwrap();

    assert!(mine.lookup_filtered("spam").unwrap().is_some());
    assert!(other.lookup_filtered("spam").unwrap().is_none());
}
