use chrono::NaiveDateTime;
use reachlog_core::{FilteredUser, format_timestamp};
use rusqlite::{OptionalExtension as _, params};

use super::{SqliteStore, get_conn};
use crate::error::StorageError;

impl SqliteStore {
    /// Get filtered user by username.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_filtered_user(&self, username: &str) -> Result<Option<FilteredUser>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let user = conn
            .query_row(
                "SELECT username, filtered_at FROM filtered_users WHERE username = ?1",
                params![username],
                |row| Ok(FilteredUser { username: row.get(0)?, filtered_at: row.get(1)? }),
            )
            .optional()?;
        Ok(user)
    }

    /// Mark a user as filtered, refreshing `filtered_at` if already present.
    ///
    /// # Errors
    /// Returns error if database upsert fails.
    pub fn update_filtered_user(&self, username: &str, at: &NaiveDateTime) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO filtered_users (username, filtered_at) VALUES (?1, ?2)
               ON CONFLICT(username) DO UPDATE SET filtered_at = excluded.filtered_at",
            params![username, format_timestamp(at)],
        )?;
        Ok(())
    }
}
