use std::collections::HashMap;

use super::KeyValueStore;
use crate::types::errors::StorageError;

/// Volatile store. Contents vanish when it is dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    scope: String,
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn scope(&self) -> &str {
        &self.scope
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
