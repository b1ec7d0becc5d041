//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;

/// A `HashMap`-backed store, handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    /// Removes `key` from the store.
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }
}
