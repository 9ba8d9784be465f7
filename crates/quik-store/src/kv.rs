//! Key-value store abstraction with automatic JSON serialization.

use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

/// String-keyed, string-valued durable storage.
///
/// Models browser local storage: blocking reads and writes, one logical
/// thread of access. Implementations use interior mutability so that a
/// store can be shared immutably by the state modules that persist into it.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether `key` is present.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Get and JSON-decode the value stored under `key`.
    ///
    /// Returns `None` if the key is absent. A present-but-malformed value
    /// is a [`StoreError::Serialization`] — callers that treat unreadable
    /// data as absent handle that at their layer.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// JSON-encode `value` and store it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

/// In-memory store, used per session and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.borrow().contains_key(key))
    }
}
