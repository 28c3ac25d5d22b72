//! Storage layer for reachlog
//!
//! SQLite-backed record store for interacted, scraped and filtered users and
//! the per-account target queue.

mod error;
mod migrations;
mod record_store;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use record_store::{RecordStore, StoreStats, TargetFilter};
pub use storage::SqliteStore;
