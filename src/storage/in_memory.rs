//! In-memory implementation of KeyValueStore for testing and development

use crate::core::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory key-value store
///
/// Clones share the same map, so a test can keep a handle, give another to
/// an editor, and later open a second editor on the same contents to
/// simulate a reload.
#[derive(Clone, Debug)]
pub struct InMemoryKeyValueStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with one slot already written
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.into(), value.into());
        }
        store
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StorageError::Lock("read"))?;

        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::Lock("write"))?;

        slots.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StorageError::Lock("write"))?;

        slots.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set("invoices", "[]").unwrap();

        assert_eq!(store.get("invoices").unwrap(), Some("[]".to_string()));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn test_clones_share_slots() {
        let store = InMemoryKeyValueStore::new();
        let handle = store.clone();

        handle.set("invoices", "[1]").unwrap();
        assert_eq!(store.get("invoices").unwrap(), Some("[1]".to_string()));

        store.remove("invoices").unwrap();
        assert!(handle.get("invoices").unwrap().is_none());
    }

    #[test]
    fn test_with_slot() {
        let store = InMemoryKeyValueStore::with_slot("invoices", "not json");
        assert_eq!(store.get("invoices").unwrap().as_deref(), Some("not json"));
    }
}
