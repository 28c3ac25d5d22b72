//! Test utilities and module declarations for storage tests.

use chrono::{Duration, NaiveDateTime};
use reachlog_core::{format_timestamp, now_local};
use tempfile::TempDir;

use crate::SqliteStore;
use crate::storage::get_conn;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_store() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::open(&db_path).unwrap();
    (store, temp_dir)
}

pub fn hours_ago(hours: i64) -> NaiveDateTime {
    now_local() - Duration::hours(hours)
}

/// Write a raw row, bypassing the upsert's count increment.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn insert_raw_interacted(store: &SqliteStore, username: &str, count: u32, last: &str, status: &str) {
    let conn = get_conn(&store.pool).unwrap();
    conn.execute(
        "INSERT INTO interacted_users (username, last_interaction, interactions_count, following_status)
           VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![username, last, count, status],
    )
    .unwrap();
}

pub fn stamp(at: &NaiveDateTime) -> String {
    format_timestamp(at)
}

mod interacted_tests;
mod record_tests;
