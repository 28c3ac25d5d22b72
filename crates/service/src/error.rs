//! Typed error enum for the service layer.
//!
//! Store failures pass through untouched so the driver loop can decide
//! whether to abort or skip.

use reachlog_core::CoreError;
use reachlog_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, parsing and file failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Record store operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// A stored value could not be interpreted (e.g. malformed timestamp).
    #[error("invalid data: {0}")]
    Core(#[from] CoreError),

    /// List or target file could not be read or written.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }
}
