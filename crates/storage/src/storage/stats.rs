use super::{SqliteStore, get_conn};
use crate::error::StorageError;
use crate::record_store::StoreStats;

impl SqliteStore {
    /// Get row counts for every record kind.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_stats(&self) -> Result<StoreStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        let (interacted, scraped, filtered, targets): (i64, i64, i64, i64) = conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM interacted_users),
                (SELECT COUNT(*) FROM scraped_users),
                (SELECT COUNT(*) FROM filtered_users),
                (SELECT COUNT(*) FROM targets)",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;
        Ok(StoreStats {
            interacted_users: interacted as u64,
            scraped_users: scraped as u64,
            filtered_users: filtered as u64,
            pending_targets: targets as u64,
        })
    }
}
