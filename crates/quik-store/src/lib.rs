//! Durable local storage for QuikShop.
//!
//! Provides the browser-localStorage analogue the storefront core persists
//! into: a small string-keyed, string-valued [`KeyValueStore`] with JSON
//! helpers, backed either by memory or by a single JSON document on disk.
//!
//! # Example
//!
//! ```rust
//! use quik_store::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("token", "abc123").unwrap();
//! assert_eq!(store.get("token").unwrap().as_deref(), Some("abc123"));
//! ```

mod error;
mod file;
mod kv;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore};
