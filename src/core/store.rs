//! Key-value storage trait

use crate::core::error::StorageError;
use std::sync::Arc;

/// A string-keyed slot store, the local counterpart of browser storage
///
/// Values are whole strings: a `set` replaces the previous value of the key
/// completely, and a `get` returns exactly what the last `set` stored.
/// Implementations take `&self` and use interior locking so handles can be
/// shared between the editor and whoever set it up.
pub trait KeyValueStore {
    /// Read the value of `key`, `None` if the slot was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value of `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
