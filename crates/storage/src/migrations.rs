//! Database migrations

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(
        "Database schema version: {} (target: {})",
        current_version,
        SCHEMA_VERSION
    );

    if current_version < 1 {
        tracing::info!("Running migration v1: initial schema");
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS interacted_users (
                username TEXT PRIMARY KEY,
                last_interaction TEXT NOT NULL,
                interactions_count INTEGER NOT NULL DEFAULT 0,
                following_status TEXT NOT NULL DEFAULT 'none',
                source TEXT,
                interaction_type TEXT,
                provider TEXT NOT NULL DEFAULT 'unknown'
            );

            CREATE TABLE IF NOT EXISTS scraped_users (
                username TEXT PRIMARY KEY,
                last_interaction TEXT NOT NULL,
                scraping_status TEXT NOT NULL DEFAULT 'not_scraped'
            );

            CREATE TABLE IF NOT EXISTS filtered_users (
                username TEXT PRIMARY KEY,
                filtered_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS targets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                provider TEXT NOT NULL DEFAULT 'unknown',
                source TEXT,
                interaction_type TEXT,
                queued_at TEXT NOT NULL
            );
            "#,
        )?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    Ok(())
}
