use chrono::NaiveDateTime;
use reachlog_core::{FollowingStatus, InteractedUser, Provider, format_timestamp};
use rusqlite::{OptionalExtension as _, params};

use super::{SqliteStore, get_conn, parse_column};
use crate::error::StorageError;

fn row_to_interacted_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<InteractedUser> {
    Ok(InteractedUser {
        username: row.get(0)?,
        last_interaction: row.get(1)?,
        interactions_count: row.get(2)?,
        following_status: parse_column(row, 3)?,
        source: row.get(4)?,
        interaction_type: row.get(5)?,
        provider: parse_column(row, 6)?,
    })
}

impl SqliteStore {
    /// Get interacted user by username.
    ///
    /// # Errors
    /// Returns error if the query fails or a stored enum cannot be parsed.
    pub fn get_interacted_user(
        &self,
        username: &str,
    ) -> Result<Option<InteractedUser>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let user = conn
            .query_row(
                "SELECT username, last_interaction, interactions_count, following_status,
                        source, interaction_type, provider
                   FROM interacted_users WHERE username = ?1",
                params![username],
                row_to_interacted_user,
            )
            .optional()?;
        Ok(user)
    }

    /// Record one interaction. The first write creates the row with a count of 1,
    /// later writes overwrite the metadata and increment the count.
    ///
    /// # Errors
    /// Returns error if database upsert fails.
    pub fn update_interacted_user(
        &self,
        username: &str,
        at: &NaiveDateTime,
        following_status: FollowingStatus,
        source: Option<&str>,
        interaction_type: Option<&str>,
        provider: Provider,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO interacted_users
               (username, last_interaction, interactions_count, following_status, source, interaction_type, provider)
               VALUES (?1, ?2, 1, ?3, ?4, ?5, ?6)
               ON CONFLICT(username) DO UPDATE SET
                   last_interaction = excluded.last_interaction,
                   interactions_count = interactions_count + 1,
                   following_status = excluded.following_status,
                   source = excluded.source,
                   interaction_type = excluded.interaction_type,
                   provider = excluded.provider",
            params![
                username,
                format_timestamp(at),
                following_status.as_str(),
                source,
                interaction_type,
                provider.as_str(),
            ],
        )?;
        Ok(())
    }
}
