use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of records kept in the history log.
pub const HISTORY_CAPACITY: usize = 20;

/// Storage key under which the history array is mirrored.
pub const HISTORY_STORAGE_KEY: &str = "string-generator-history";

/// One successful generation, as shown in the history list and mirrored to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecord {
    pub id: String,
    pub value: String,
    pub timestamp: DateTime<Utc>,
    pub length: usize,
    pub character_sets: Vec<String>,
}

impl GeneratedRecord {
    /// Builds a record for a freshly generated value, stamped with the current time.
    pub fn new(value: String, length: usize, character_sets: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value,
            timestamp: Utc::now(),
            length,
            character_sets,
        }
    }

    /// A record is well-formed when its value has exactly `length` characters.
    pub fn is_well_formed(&self) -> bool {
        self.length >= 1 && self.value.chars().count() == self.length
    }
}
