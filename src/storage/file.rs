//! JSON-file key-value store.
//!
//! Each scope maps to `<dir>/<scope>.json`, a flat JSON object of string
//! values. Writes go to a sibling temp file that is then renamed over the
//! original, so a crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::types::errors::StorageError;

pub struct JsonFileStore {
    scope: String,
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for `scope` inside `dir`. Nothing is touched on disk until the first write.
    pub fn new<P: AsRef<Path>>(dir: P, scope: &str) -> Self {
        let path = dir.as_ref().join(format!("{}.json", scope));
        Self {
            scope: scope.to_string(),
            path,
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            StorageError::Unavailable(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Serialization(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Unavailable(format!("Failed to create directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| StorageError::Unavailable(format!("Failed to write store: {}", e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StorageError::Unavailable(format!("Failed to replace store: {}", e)))?;
        Ok(())
    }

    /// Loads the map for a write. A corrupt file is replaced rather than blocking writes.
    fn read_map_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_map() {
            Ok(map) => Ok(map),
            Err(StorageError::Serialization(msg)) => {
                tracing::warn!(scope = %self.scope, error = %msg, "discarding corrupt store file");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn scope(&self) -> &str {
        &self.scope
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}
