//! In-memory key-value medium for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::traits::KeyValueStore;

/// Process-local medium backed by a map
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with a persisted payload under test
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut items) = store.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let items = self.items.lock().map_err(|e| StoreError::Unavailable {
            message: e.to_string(),
        })?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut items = self.items.lock().map_err(|e| StoreError::Unavailable {
            message: e.to_string(),
        })?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let store = InMemoryStore::new();
        assert_eq!(store.get_item("missing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get_overwrites() {
        let store = InMemoryStore::new();
        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_item() {
        let store = InMemoryStore::with_item("k", "v");
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
