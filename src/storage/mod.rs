//! Durable key-value storage for strgen.
//!
//! The history log mirrors itself into a [`KeyValueStore`]. Three backends are
//! provided: [`MemoryStore`] for tests, [`JsonFileStore`] (one JSON file per
//! scope) and [`SqliteStore`] (an embedded `kv` table).
//!
//! # Usage
//!
//! ```no_run
//! use strgen::storage::{KeyValueStore, SqliteStore};
//!
//! let mut store = SqliteStore::open("strgen.db", "strgen").expect("failed to open store");
//! store.set("greeting", "hello").expect("write failed");
//! assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
//! ```

pub mod file;
pub mod memory;
pub mod migrations;
pub mod sqlite;

use std::path::PathBuf;

use crate::platform;
use crate::types::errors::StorageError;
use crate::types::settings::{StorageBackend, StorageSettings};

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A string-keyed store whose keys live under a single scope.
pub trait KeyValueStore {
    /// Namespace this store reads and writes under.
    fn scope(&self) -> &str;
    /// Returns the value for `key`, or `None` if it was never set or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Owned, thread-movable store handle as held by the history manager.
pub type BoxedStore = Box<dyn KeyValueStore + Send>;

/// Opens the backend described by `settings`.
///
/// Relative locations are resolved against the platform data directory when
/// `settings.path` is unset.
pub fn open_store(settings: &StorageSettings) -> Result<BoxedStore, StorageError> {
    let scope = settings.scope.as_str();
    match settings.backend {
        StorageBackend::Memory => Ok(Box::new(MemoryStore::new(scope))),
        StorageBackend::File => {
            let dir = settings
                .path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(platform::get_data_dir);
            Ok(Box::new(JsonFileStore::new(dir, scope)))
        }
        StorageBackend::Sqlite => {
            let path = settings
                .path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| platform::get_data_dir().join("strgen.db"));
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Unavailable(format!("Failed to create data directory: {}", e))
                })?;
            }
            Ok(Box::new(SqliteStore::open(path, scope)?))
        }
    }
}

/// Opens the configured store, degrading to an in-memory one when it cannot
/// be opened. The flag is `false` when the fallback was taken, so callers can
/// report that nothing is written durably.
pub fn open_store_or_memory(settings: &StorageSettings) -> (BoxedStore, bool) {
    match open_store(settings) {
        Ok(store) => (store, true),
        Err(e) => {
            tracing::warn!(error = %e, "history store unavailable, keeping history in memory");
            (Box::new(MemoryStore::new(&settings.scope)), false)
        }
    }
}
