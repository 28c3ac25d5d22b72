use thiserror::Error;

/// Errors raised while parsing or validating domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid timestamp {value:?}: expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { value: String },

    #[error("Invalid following status: {0}")]
    InvalidFollowingStatus(String),

    #[error("Invalid scraping status: {0}")]
    InvalidScrapingStatus(String),

    #[error("Invalid provider: {0}")]
    InvalidProvider(String),

    #[error("Invalid re-interaction cooldown {0:?}: expected hours as N or MIN-MAX")]
    InvalidCooldown(String),
}
