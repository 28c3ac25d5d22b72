//! Whitelist / blacklist loading.
//!
//! Both files are optional. They are read once at startup and never reloaded.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use reachlog_core::constants::{FILENAME_BLACKLIST, FILENAME_WHITELIST};

use crate::ServiceError;

/// Read a line-per-username file into a set. A missing file is an empty set.
///
/// # Errors
/// Returns [`ServiceError::Io`] for failures other than the file not existing.
pub fn load_user_list(path: &Path) -> Result<HashSet<String>, ServiceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(content.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_owned).collect())
}

/// The two static sets consulted by the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLists {
    pub whitelist: HashSet<String>,
    pub blacklist: HashSet<String>,
}

impl UserLists {
    /// Load `whitelist.txt` and `blacklist.txt` from an account directory.
    ///
    /// # Errors
    /// Returns [`ServiceError::Io`] if an existing file cannot be read.
    pub fn load(account_dir: &Path) -> Result<Self, ServiceError> {
        let lists = Self {
            whitelist: load_user_list(&account_dir.join(FILENAME_WHITELIST))?,
            blacklist: load_user_list(&account_dir.join(FILENAME_BLACKLIST))?,
        };
        tracing::debug!(
            whitelist = lists.whitelist.len(),
            blacklist = lists.blacklist.len(),
            "Loaded user lists"
        );
        Ok(lists)
    }
}
