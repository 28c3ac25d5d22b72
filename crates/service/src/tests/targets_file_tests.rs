use reachlog_core::Provider;
use reachlog_core::constants::{FILENAME_LOADED_TARGETS, FILENAME_TARGETS};
use reachlog_storage::{RecordStore as _, SqliteStore};
use tempfile::TempDir;

use super::{ACCOUNT, account_dir, open_store, write_account_file};
use crate::drain_targets_file;

fn read(temp_dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(account_dir(temp_dir).join(name)).unwrap()
}

#[test]
fn test_drain_twice_does_not_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    write_account_file(&temp_dir, FILENAME_TARGETS, "x\ny\n");

    let store = open_store(&temp_dir, None);
    assert_eq!(store.stats().unwrap().pending_targets, 2);
    drop(store);

    // second run sees the now-empty file
    let store = open_store(&temp_dir, None);
    assert_eq!(store.stats().unwrap().pending_targets, 2);

    assert_eq!(read(&temp_dir, FILENAME_TARGETS), "");
    assert_eq!(read(&temp_dir, FILENAME_LOADED_TARGETS), "x\ny\n");

    assert_eq!(store.dequeue_target().unwrap().as_deref(), Some("x"));
    assert_eq!(store.dequeue_target().unwrap().as_deref(), Some("y"));
    assert_eq!(store.dequeue_target().unwrap(), None);
}

#[test]
fn test_missing_targets_file_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir, None);

    assert_eq!(store.stats().unwrap().pending_targets, 0);
    assert!(!account_dir(&temp_dir).join(FILENAME_TARGETS).exists());
    assert!(!account_dir(&temp_dir).join(FILENAME_LOADED_TARGETS).exists());
}

#[test]
fn test_archive_is_append_only() {
    let temp_dir = TempDir::new().unwrap();
    write_account_file(&temp_dir, FILENAME_LOADED_TARGETS, "old\n");
    write_account_file(&temp_dir, FILENAME_TARGETS, "new1\r\n\nnew2   \n");

    let db = SqliteStore::open_account(temp_dir.path(), ACCOUNT).unwrap();
    let drained = drain_targets_file(&account_dir(&temp_dir), &db).unwrap();

    assert_eq!(drained, 2);
    assert_eq!(read(&temp_dir, FILENAME_LOADED_TARGETS), "old\nnew1\nnew2\n");
    assert_eq!(read(&temp_dir, FILENAME_TARGETS), "");
}

#[test]
fn test_drained_targets_are_tagged_as_targets_list() {
    let temp_dir = TempDir::new().unwrap();
    write_account_file(&temp_dir, FILENAME_TARGETS, "solo\n");

    let db = SqliteStore::open_account(temp_dir.path(), ACCOUNT).unwrap();
    drain_targets_file(&account_dir(&temp_dir), &db).unwrap();

    let target = db.dequeue_next_target(&[]).unwrap().unwrap();
    assert_eq!(target.username, "solo");
    assert_eq!(target.provider, Provider::TargetsList);
}

#[test]
fn test_redrain_after_crash_keeps_queue_unique() {
    let temp_dir = TempDir::new().unwrap();
    let db = SqliteStore::open_account(temp_dir.path(), ACCOUNT).unwrap();
    // a previous run queued the targets but died before truncating the input
    db.enqueue_targets(&["x", "y"], Provider::TargetsList, None, None).unwrap();
    write_account_file(&temp_dir, FILENAME_TARGETS, "x\ny\n");

    drain_targets_file(&account_dir(&temp_dir), &db).unwrap();

    assert_eq!(db.stats().unwrap().pending_targets, 2);
    assert_eq!(read(&temp_dir, FILENAME_TARGETS), "");
}

#[test]
fn test_blank_only_file_is_truncated() {
    let temp_dir = TempDir::new().unwrap();
    write_account_file(&temp_dir, FILENAME_TARGETS, "\n   \n");

    let db = SqliteStore::open_account(temp_dir.path(), ACCOUNT).unwrap();
    assert_eq!(drain_targets_file(&account_dir(&temp_dir), &db).unwrap(), 0);

    assert_eq!(read(&temp_dir, FILENAME_TARGETS), "");
    assert_eq!(db.stats().unwrap().pending_targets, 0);
    assert!(!account_dir(&temp_dir).join(FILENAME_LOADED_TARGETS).exists());
}
