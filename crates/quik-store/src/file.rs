//! File-backed store: one JSON document on disk.

use crate::{KeyValueStore, StoreError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key-value store persisted as a single JSON object in a file.
///
/// The whole document is read once at open and rewritten on every
/// mutation. That is the localStorage durability model: small payloads,
/// blocking writes, no partial updates.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RefCell<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file opens empty. An unreadable or malformed file also
    /// opens empty — persisted data that cannot be decoded is treated as
    /// absent rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding malformed store file");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "store file unreadable, starting empty");
                HashMap::new()
            }
        };

        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&*self.entries.borrow())?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            self.persist()?;
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.borrow().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique scratch path under the system temp dir.
    fn scratch_path(tag: &str) -> PathBuf {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("quik-store-{tag}-{ts:x}-{n}.json"))
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let store = JsonFileStore::open(scratch_path("missing"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_round_trip_across_reopen() {
        let path = scratch_path("reopen");

        let store = JsonFileStore::open(&path);
        store.set("token", "abc123").unwrap();
        store.set("user", r#"{"id":"1"}"#).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc123"));
        assert_eq!(
            reopened.get("user").unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let path = scratch_path("corrupt");
        fs::write(&path, "this is not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("token").unwrap(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_delete_persists() {
        let path = scratch_path("delete");

        let store = JsonFileStore::open(&path);
        store.set("token", "abc123").unwrap();
        store.delete("token").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("token").unwrap(), None);

        let _ = fs::remove_file(&path);
    }
}
