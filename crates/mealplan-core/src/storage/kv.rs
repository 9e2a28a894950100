//! SQLite-backed key-value store

use rusqlite::{params, OptionalExtension};

use super::{database::Database, KeyValueStore, Result};

/// Key-value store over the `kv_store` table
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Create a store with an existing database
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .db
            .conn()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.conn().execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}
