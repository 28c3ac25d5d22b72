//! Shared constants for reachlog.
//!
//! File names live here because the CLI, the service layer and the tests all
//! need to agree on the per-account directory layout.

/// Optional allow-list, one username per line.
pub const FILENAME_WHITELIST: &str = "whitelist.txt";

/// Optional deny-list, one username per line.
pub const FILENAME_BLACKLIST: &str = "blacklist.txt";

/// Input queue drained into the database on startup.
pub const FILENAME_TARGETS: &str = "targets.txt";

/// Append-only archive of every line drained from [`FILENAME_TARGETS`].
pub const FILENAME_LOADED_TARGETS: &str = "targets_loaded.txt";

/// SQLite database file inside each account directory.
pub const FILENAME_DATABASE: &str = "reachlog.db";

/// Cooldown used when `reinteract_after` is set but cannot be parsed.
pub const DEFAULT_REINTERACT_AFTER_HOURS: u32 = 168;

/// Default connection pool size for the SQLite store.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
