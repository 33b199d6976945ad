//! History Manager.
//!
//! Keeps the capped, newest-first log of generated strings in memory and
//! mirrors it as a JSON array into a [`KeyValueStore`]. The in-memory log is
//! authoritative for the session: a failing store is reported but never
//! blocks appending or reading.

use std::collections::VecDeque;

use crate::storage::BoxedStore;
use crate::types::errors::HistoryError;
use crate::types::history::{GeneratedRecord, HISTORY_CAPACITY, HISTORY_STORAGE_KEY};

/// Trait defining history log operations.
pub trait HistoryManagerTrait {
    fn append(&mut self, record: GeneratedRecord) -> Result<(), HistoryError>;
    fn clear(&mut self) -> Result<(), HistoryError>;
    fn load(&mut self) -> usize;
    fn persist(&mut self) -> Result<(), HistoryError>;
    fn entries(&self) -> Vec<GeneratedRecord>;
    fn get(&self, id: &str) -> Option<&GeneratedRecord>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// History log backed by an injected key-value store.
pub struct HistoryManager {
    store: BoxedStore,
    entries: VecDeque<GeneratedRecord>,
}

impl HistoryManager {
    /// Creates an empty history over `store`. Call [`HistoryManagerTrait::load`]
    /// to pick up a previously persisted log.
    pub fn new(store: BoxedStore) -> Self {
        Self {
            store,
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Creates a history over `store` and loads the persisted log.
    pub fn open(store: BoxedStore) -> Self {
        let mut manager = Self::new(store);
        manager.load();
        manager
    }

    /// Decodes a mirror. Any malformed record invalidates the whole mirror.
    fn decode(raw: &str) -> Result<Vec<GeneratedRecord>, String> {
        let records: Vec<GeneratedRecord> =
            serde_json::from_str(raw).map_err(|e| format!("invalid history JSON: {}", e))?;

        if let Some(bad) = records.iter().find(|r| !r.is_well_formed()) {
            return Err(format!(
                "record {} has length {} but value of {} chars",
                bad.id,
                bad.length,
                bad.value.chars().count()
            ));
        }
        Ok(records)
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Inserts `record` at the front, evicts the oldest entries past capacity,
    /// then persists. On a persistence failure the record is still kept.
    fn append(&mut self, record: GeneratedRecord) -> Result<(), HistoryError> {
        self.entries.push_front(record);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist()
    }

    /// Erases the durable mirror first, then the in-memory log.
    ///
    /// If the key cannot be removed an empty array is written in its place, so
    /// a reload never resurrects cleared entries. Memory is cleared either way.
    fn clear(&mut self) -> Result<(), HistoryError> {
        let result = match self.store.remove(HISTORY_STORAGE_KEY) {
            Ok(()) => Ok(()),
            Err(remove_err) => {
                tracing::warn!(error = %remove_err, "failed to remove history mirror, overwriting");
                self.store
                    .set(HISTORY_STORAGE_KEY, "[]")
                    .map_err(HistoryError::from)
            }
        };
        self.entries.clear();
        tracing::info!("history cleared");
        result
    }

    /// Replaces the in-memory log with the persisted one and returns its size.
    ///
    /// An absent, unreadable or malformed mirror yields an empty history.
    fn load(&mut self) -> usize {
        self.entries.clear();

        let raw = match self.store.get(HISTORY_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(e) => {
                tracing::warn!(error = %e, "history mirror unreadable, starting empty");
                return 0;
            }
        };

        match Self::decode(&raw) {
            Ok(records) => {
                self.entries.extend(records.into_iter().take(HISTORY_CAPACITY));
                tracing::debug!(count = self.entries.len(), "history loaded");
            }
            Err(msg) => {
                tracing::warn!(error = %msg, "history mirror malformed, starting empty");
            }
        }
        self.entries.len()
    }

    /// Writes the current log verbatim to the mirror.
    fn persist(&mut self) -> Result<(), HistoryError> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| HistoryError::PersistenceUnavailable(e.to_string()))?;

        self.store.set(HISTORY_STORAGE_KEY, &json).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist history");
            HistoryError::from(e)
        })
    }

    /// Returns a snapshot of the log, newest first.
    fn entries(&self) -> Vec<GeneratedRecord> {
        self.entries.iter().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<&GeneratedRecord> {
        self.entries.iter().find(|r| r.id == id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
