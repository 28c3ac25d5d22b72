//! Test utilities and module declarations for service tests.

use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use reachlog_core::constants::FILENAME_DATABASE;
use reachlog_core::now_local;
use tempfile::TempDir;

use crate::{InteractionStore, StoreConfig};

pub const ACCOUNT: &str = "me";

pub fn hours_ago(hours: i64) -> NaiveDateTime {
    now_local() - Duration::hours(hours)
}

pub fn account_dir(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join(ACCOUNT)
}

/// Write a file into the account directory before the store is opened.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn write_account_file(temp_dir: &TempDir, name: &str, content: &str) {
    let dir = account_dir(temp_dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), content).unwrap();
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn open_store(temp_dir: &TempDir, reinteract_after: Option<&str>) -> InteractionStore {
    let mut config = StoreConfig::new(temp_dir.path()).account(ACCOUNT);
    if let Some(value) = reinteract_after {
        config = config.reinteract_after(value);
    }
    InteractionStore::open(&config).unwrap()
}

/// Insert an interacted row directly, e.g. a failed attempt with a zero count.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_raw_interacted(account_dir: &Path, username: &str, count: u32, last: &str) {
    let conn = rusqlite::Connection::open(account_dir.join(FILENAME_DATABASE)).unwrap();
    conn.execute(
        "INSERT INTO interacted_users (username, last_interaction, interactions_count)
           VALUES (?1, ?2, ?3)",
        rusqlite::params![username, last, count],
    )
    .unwrap();
}

mod targets_file_tests;
