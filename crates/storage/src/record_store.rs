//! Record store abstraction
//!
//! The interaction tracker only talks to persistence through this trait. The
//! SQLite implementation lives in [`crate::SqliteStore`]; tests and other
//! backends can provide their own.

use chrono::NaiveDateTime;
use reachlog_core::{
    FilteredUser, FollowingStatus, InteractedUser, Provider, ScrapedUser, ScrapingStatus, Target,
};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Predicate deciding whether a popped target must be discarded.
pub type TargetFilter<'a> = &'a dyn Fn(&str) -> Result<bool, StorageError>;

/// Row counts per record kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub interacted_users: u64,
    pub scraped_users: u64,
    pub filtered_users: u64,
    pub pending_targets: u64,
}

/// Durable per-account state keyed by username.
///
/// Calls are synchronous and either complete or fail; implementations do not
/// retry.
pub trait RecordStore: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────────

    fn lookup_interacted(&self, username: &str) -> Result<Option<InteractedUser>, StorageError>;

    fn lookup_scraped(&self, username: &str) -> Result<Option<ScrapedUser>, StorageError>;

    fn lookup_filtered(&self, username: &str) -> Result<Option<FilteredUser>, StorageError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Upserts
    // ─────────────────────────────────────────────────────────────────────────────

    /// Insert or update an interacted user, incrementing `interactions_count`.
    fn upsert_interacted(
        &self,
        username: &str,
        at: &NaiveDateTime,
        following_status: FollowingStatus,
        source: Option<&str>,
        interaction_type: Option<&str>,
        provider: Provider,
    ) -> Result<(), StorageError>;

    fn upsert_scraped(
        &self,
        username: &str,
        at: &NaiveDateTime,
        status: ScrapingStatus,
    ) -> Result<(), StorageError>;

    fn upsert_filtered(&self, username: &str, at: &NaiveDateTime) -> Result<(), StorageError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Target queue
    // ─────────────────────────────────────────────────────────────────────────────

    /// Append usernames to the queue. Usernames already queued are left where
    /// they are. Returns how many were newly queued.
    fn enqueue_targets(
        &self,
        usernames: &[&str],
        provider: Provider,
        source: Option<&str>,
        interaction_type: Option<&str>,
    ) -> Result<usize, StorageError>;

    /// Pop targets in FIFO order until one passes every filter.
    ///
    /// Each popped entry is removed from the queue whether it is returned or
    /// discarded. Filters run in the order given.
    fn dequeue_next_target(
        &self,
        exclude: &[TargetFilter<'_>],
    ) -> Result<Option<Target>, StorageError>;

    /// Up to `limit` queued targets in FIFO order, left in the queue.
    fn peek_targets(&self, limit: usize) -> Result<Vec<Target>, StorageError>;

    fn stats(&self) -> Result<StoreStats, StorageError>;
}
