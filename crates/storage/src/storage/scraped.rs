use chrono::NaiveDateTime;
use reachlog_core::{ScrapedUser, ScrapingStatus, format_timestamp};
use rusqlite::{OptionalExtension as _, params};

use super::{SqliteStore, get_conn, parse_column};
use crate::error::StorageError;

impl SqliteStore {
    /// Get scraped user by username.
    ///
    /// # Errors
    /// Returns error if the query fails or the stored status cannot be parsed.
    pub fn get_scraped_user(&self, username: &str) -> Result<Option<ScrapedUser>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let user = conn
            .query_row(
                "SELECT username, last_interaction, scraping_status
                   FROM scraped_users WHERE username = ?1",
                params![username],
                |row| {
                    Ok(ScrapedUser {
                        username: row.get(0)?,
                        last_interaction: row.get(1)?,
                        scraping_status: parse_column(row, 2)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Insert or overwrite a scraped user.
    ///
    /// # Errors
    /// Returns error if database upsert fails.
    pub fn update_scraped_user(
        &self,
        username: &str,
        at: &NaiveDateTime,
        status: ScrapingStatus,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO scraped_users (username, last_interaction, scraping_status)
               VALUES (?1, ?2, ?3)
               ON CONFLICT(username) DO UPDATE SET
                   last_interaction = excluded.last_interaction,
                   scraping_status = excluded.scraping_status",
            params![username, format_timestamp(at), status.as_str()],
        )?;
        Ok(())
    }
}
