//! In-memory key-value store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{KeyValueStore, Result};

/// Volatile store. Clones share the same map, so a test can keep a handle
/// while a planner owns another and later reload from it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with raw values
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("meals", "[]").expect("set");
        assert_eq!(handle.get("meals").expect("get").as_deref(), Some("[]"));
    }

    #[test]
    fn test_with_entries() {
        let store = MemoryStore::with_entries([("shoppingList", "[]")]);
        assert_eq!(store.get("shoppingList").expect("get").as_deref(), Some("[]"));
        assert_eq!(store.get("meals").expect("get"), None);
    }
}
