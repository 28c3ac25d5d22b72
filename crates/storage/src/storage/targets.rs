use reachlog_core::{Provider, Target, format_timestamp, now_local};
use rusqlite::{OptionalExtension as _, params};

use super::{SqliteStore, get_conn, parse_column};
use crate::error::StorageError;
use crate::record_store::TargetFilter;

fn row_to_target(row: &rusqlite::Row<'_>) -> rusqlite::Result<Target> {
    Ok(Target {
        username: row.get(0)?,
        provider: parse_column(row, 1)?,
        source: row.get(2)?,
        interaction_type: row.get(3)?,
    })
}

impl SqliteStore {
    /// Queue usernames in one transaction. Already queued usernames are ignored.
    ///
    /// # Errors
    /// Returns error if database insert fails; nothing is queued in that case.
    pub fn add_targets(
        &self,
        usernames: &[&str],
        provider: Provider,
        source: Option<&str>,
        interaction_type: Option<&str>,
    ) -> Result<usize, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let queued_at = format_timestamp(&now_local());
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO targets (username, provider, source, interaction_type, queued_at)
                   VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for username in usernames {
                inserted +=
                    stmt.execute(params![username, provider.as_str(), source, interaction_type, queued_at])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    /// Remove and return the oldest queued target, if any.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn pop_oldest_target(&self) -> Result<Option<Target>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let target = conn
            .query_row(
                "DELETE FROM targets
                   WHERE id = (SELECT id FROM targets ORDER BY id ASC LIMIT 1)
                   RETURNING username, provider, source, interaction_type",
                [],
                row_to_target,
            )
            .optional()?;
        Ok(target)
    }

    /// Pop targets until one passes every filter or the queue runs dry.
    ///
    /// # Errors
    /// Returns the first database or filter error. The target being checked
    /// when a filter fails has already been removed.
    pub fn pop_target(&self, exclude: &[TargetFilter<'_>]) -> Result<Option<Target>, StorageError> {
        'next: while let Some(target) = self.pop_oldest_target()? {
            for filter in exclude {
                if filter(&target.username)? {
                    tracing::debug!(username = %target.username, "Discarding excluded target");
                    continue 'next;
                }
            }
            return Ok(Some(target));
        }
        Ok(None)
    }

    /// Queued targets in FIFO order, without removing them.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn peek_targets(&self, limit: usize) -> Result<Vec<Target>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT username, provider, source, interaction_type
               FROM targets ORDER BY id ASC LIMIT ?1",
        )?;
        let targets = stmt
            .query_map(params![limit as i64], row_to_target)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(targets)
    }
}
