use serde::{Deserialize, Serialize};

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    pub generator: GeneratorSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

/// Generation defaults and bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorSettings {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Character set ids enabled when a session starts.
    pub enabled_sets: Vec<String>,
    /// Pause before each generation, in milliseconds. 0 disables it.
    pub delay_ms: u64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_length: 12,
            min_length: 1,
            max_length: 128,
            enabled_sets: vec![
                "uppercase".to_string(),
                "lowercase".to_string(),
                "numbers".to_string(),
            ],
            delay_ms: 0,
        }
    }
}

/// Which key-value backend holds the history mirror.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Sqlite,
    Memory,
}

/// Durable mirror location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Directory (file backend) or database file (sqlite backend).
    /// Falls back to the platform data directory when unset.
    pub path: Option<String>,
    pub scope: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: None,
            scope: "strgen".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}
