//! Per-username records as read back from the store.
//!
//! Timestamps are kept as the persisted text. They are parsed on demand so a
//! corrupt value only fails the operation that actually needs the time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::{FollowingStatus, Provider, ScrapingStatus};
use crate::timestamp::parse_timestamp;

/// A user we have contacted at least once (or attempted to)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractedUser {
    pub username: String,
    /// `YYYY-MM-DD HH:MM:SS`, local time
    pub last_interaction: String,
    pub interactions_count: u32,
    pub following_status: FollowingStatus,
    pub source: Option<String>,
    pub interaction_type: Option<String>,
    pub provider: Provider,
}

impl InteractedUser {
    /// A row with a zero count is a failed attempt and counts as "never interacted".
    #[must_use]
    pub const fn was_successful(&self) -> bool {
        self.interactions_count > 0
    }

    /// # Errors
    /// Returns [`CoreError::InvalidTimestamp`] if the stored value is malformed.
    pub fn last_interaction_at(&self) -> Result<NaiveDateTime, CoreError> {
        parse_timestamp(&self.last_interaction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedUser {
    pub username: String,
    pub last_interaction: String,
    pub scraping_status: ScrapingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredUser {
    pub username: String,
    pub filtered_at: String,
}

/// A username waiting in the outreach queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub username: String,
    pub provider: Provider,
    pub source: Option<String>,
    pub interaction_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interacted(count: u32, last_interaction: &str) -> InteractedUser {
        InteractedUser {
            username: "alice".to_owned(),
            last_interaction: last_interaction.to_owned(),
            interactions_count: count,
            following_status: FollowingStatus::None,
            source: None,
            interaction_type: None,
            provider: Provider::Unknown,
        }
    }

    #[test]
    fn zero_count_is_not_successful() {
        assert!(!interacted(0, "2024-01-01 00:00:00").was_successful());
        assert!(interacted(3, "2024-01-01 00:00:00").was_successful());
    }

    #[test]
    fn malformed_last_interaction_fails_only_on_parse() {
        let user = interacted(1, "yesterday");
        assert!(user.was_successful());
        assert!(user.last_interaction_at().is_err());
    }
}
