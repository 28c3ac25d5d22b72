//! `SQLite` record store
//!
//! One database per account. All methods are synchronous; the pool only
//! exists so a handle can be cloned and shared between threads.

// SQLite uses i64 for counts, Rust uses u64/usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust u64 conversions are safe within DB row counts"
)]

mod filtered;
mod interacted;
mod scraped;
mod stats;
mod targets;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDateTime;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use reachlog_core::constants::{DEFAULT_DB_POOL_SIZE, FILENAME_DATABASE};
use reachlog_core::env_config::env_parse_with_default;
use reachlog_core::{
    CoreError, FilteredUser, FollowingStatus, InteractedUser, Provider, ScrapedUser,
    ScrapingStatus, Target,
};
use rusqlite::Connection;
use rusqlite::types::Type;

use crate::error::StorageError;
use crate::migrations;
use crate::record_store::{RecordStore, StoreStats, TargetFilter};

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Record store backed by a `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pub(crate) pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Parse a text column through its `FromStr`, reporting failures as conversion errors
pub(crate) fn parse_column<T>(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    let raw: String = row.get(idx)?;
    raw.parse().map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Busy timeout and WAL so concurrent runs against one account wait instead of failing
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("REACHLOG_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

impl SqliteStore {
    /// Open (or create) the database at `db_path` and bring its schema up to date.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or a migration fails.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(path = %db_path.display(), pool_size, "Record store opened");

        Ok(Self { pool, path: db_path.to_path_buf() })
    }

    /// Open the database of `account` under `data_dir`, creating the account
    /// directory if needed.
    ///
    /// # Errors
    /// Returns error if the directory cannot be created or the database cannot be opened.
    pub fn open_account(data_dir: &Path, account: &str) -> Result<Self, StorageError> {
        let account_dir = data_dir.join(account);
        std::fs::create_dir_all(&account_dir)?;
        Self::open(&account_dir.join(FILENAME_DATABASE))
    }

    /// Location of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for SqliteStore {
    fn lookup_interacted(&self, username: &str) -> Result<Option<InteractedUser>, StorageError> {
        self.get_interacted_user(username)
    }

    fn lookup_scraped(&self, username: &str) -> Result<Option<ScrapedUser>, StorageError> {
        self.get_scraped_user(username)
    }

    fn lookup_filtered(&self, username: &str) -> Result<Option<FilteredUser>, StorageError> {
        self.get_filtered_user(username)
    }

    fn upsert_interacted(
        &self,
        username: &str,
        at: &NaiveDateTime,
        following_status: FollowingStatus,
        source: Option<&str>,
        interaction_type: Option<&str>,
        provider: Provider,
    ) -> Result<(), StorageError> {
        self.update_interacted_user(username, at, following_status, source, interaction_type, provider)
    }

    fn upsert_scraped(
        &self,
        username: &str,
        at: &NaiveDateTime,
        status: ScrapingStatus,
    ) -> Result<(), StorageError> {
        self.update_scraped_user(username, at, status)
    }

    fn upsert_filtered(&self, username: &str, at: &NaiveDateTime) -> Result<(), StorageError> {
        self.update_filtered_user(username, at)
    }

    fn enqueue_targets(
        &self,
        usernames: &[&str],
        provider: Provider,
        source: Option<&str>,
        interaction_type: Option<&str>,
    ) -> Result<usize, StorageError> {
        self.add_targets(usernames, provider, source, interaction_type)
    }

    fn dequeue_next_target(
        &self,
        exclude: &[TargetFilter<'_>],
    ) -> Result<Option<Target>, StorageError> {
        self.pop_target(exclude)
    }

    fn peek_targets(&self, limit: usize) -> Result<Vec<Target>, StorageError> {
        SqliteStore::peek_targets(self, limit)
    }

    fn stats(&self) -> Result<StoreStats, StorageError> {
        self.get_stats()
    }
}
