//! The one timestamp format the store understands.
//!
//! Timestamps are naive local time. Mixing time zones between writers is not
//! detected.

use chrono::{Local, NaiveDateTime};

use crate::error::CoreError;

/// `strftime` pattern for persisted timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time. Sub-second precision is lost once formatted.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

#[must_use]
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a persisted timestamp.
///
/// # Errors
/// Returns [`CoreError::InvalidTimestamp`] if `value` does not match [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| CoreError::InvalidTimestamp { value: value.to_owned() })
}
