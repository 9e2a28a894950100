//! SQLite connection holding the planner's key-value table
//!
//! The schema is tiny, so its version lives in SQLite's own `user_version`
//! header field instead of a bookkeeping table.

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use super::Result;

/// Value written to `PRAGMA user_version` once the schema is in place
pub(crate) const SCHEMA_VERSION: i32 = 1;

/// One row per stored collection; `value` is the collection's JSON text
const CREATE_KV_STORE: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file, creating parent directories
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        // A second planner instance waits on the lock instead of failing
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(Duration::from_secs(5))?;

        Self::with_schema(conn)
    }

    /// Private in-memory database for tests
    #[cfg(test)]
    pub(crate) fn in_memory() -> Result<Self> {
        Self::with_schema(Connection::open_in_memory()?)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Schema version recorded in the file header
    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?)
    }

    fn with_schema(conn: Connection) -> Result<Self> {
        let db = Self { conn };
        let found = db.schema_version()?;
        if found < SCHEMA_VERSION {
            info!(found, target = SCHEMA_VERSION, "Creating planner tables");
            db.conn.execute_batch(CREATE_KV_STORE)?;
            db.conn
                .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }
        Ok(db)
    }
}
