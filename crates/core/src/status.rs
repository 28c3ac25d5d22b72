//! Closed status enums persisted alongside user records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether we currently follow an interacted user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FollowingStatus {
    /// Never followed, or the outcome did not touch following
    #[default]
    None,
    Followed,
    Unfollowed,
}

impl FollowingStatus {
    /// Status implied by the outcome flags of one interaction.
    ///
    /// `unfollowed` wins when both flags are set.
    #[must_use]
    pub const fn from_flags(followed: bool, unfollowed: bool) -> Self {
        if unfollowed {
            Self::Unfollowed
        } else if followed {
            Self::Followed
        } else {
            Self::None
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::None => "none",
            Self::Followed => "followed",
            Self::Unfollowed => "unfollowed",
        }
    }
}

impl FromStr for FollowingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "followed" => Ok(Self::Followed),
            "unfollowed" => Ok(Self::Unfollowed),
            other => Err(CoreError::InvalidFollowingStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for FollowingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scraping a user's profile
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScrapingStatus {
    Scraped,
    #[default]
    NotScraped,
}

impl ScrapingStatus {
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Scraped } else { Self::NotScraped }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Scraped => "scraped",
            Self::NotScraped => "not_scraped",
        }
    }
}

impl FromStr for ScrapingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scraped" => Ok(Self::Scraped),
            "not_scraped" => Ok(Self::NotScraped),
            other => Err(CoreError::InvalidScrapingStatus(other.to_owned())),
        }
    }
}

impl fmt::Display for ScrapingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a target or an interaction came from
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[default]
    Unknown,
    /// Found while interacting with another account's audience
    Interaction,
    /// Scraped on behalf of another account
    Scraping,
    /// Supplied by the operator through `targets.txt`
    TargetsList,
}

impl Provider {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Unknown => "unknown",
            Self::Interaction => "interaction",
            Self::Scraping => "scraping",
            Self::TargetsList => "targets_list",
        }
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "unknown" => Ok(Self::Unknown),
            "interaction" => Ok(Self::Interaction),
            "scraping" => Ok(Self::Scraping),
            "targets_list" => Ok(Self::TargetsList),
            other => Err(CoreError::InvalidProvider(other.to_owned())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
