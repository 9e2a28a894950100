//! Persistence layer
//!
//! The planner only sees the [`KeyValueStore`] trait. Backends:
//! - SQLite key-value table (the default, survives restarts)
//! - In-memory map (tests and ephemeral sessions)
//!
//! [`PlannerRepository`] adds typed JSON load/save on top of any store.

mod database;
mod error;
mod kv;
mod memory;
mod repository;

pub use database::Database;
pub use error::StorageError;
pub use kv::SqliteStore;
pub use memory::MemoryStore;
pub use repository::PlannerRepository;

/// Result alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Opaque string key-value store
///
/// Values are whole serialized collections; a write replaces the previous value.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
