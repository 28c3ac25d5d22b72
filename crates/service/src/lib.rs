//! Service layer for reachlog
//!
//! [`InteractionStore`] ties together the record store, the whitelist and
//! blacklist files and the `targets.txt` hand-off for one account.

#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod config;
mod error;
mod interaction_store;
mod lists;
mod targets_file;
#[cfg(test)]
mod tests;

pub use config::StoreConfig;
pub use error::ServiceError;
pub use interaction_store::{InteractionOutcome, InteractionStore};
pub use lists::{UserLists, load_user_list};
pub use targets_file::drain_targets_file;
