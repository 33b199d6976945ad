use std::fmt;

// === GeneratorError ===

/// Errors raised before or during string generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Requested length out of range, or the alphabet is empty.
    InvalidInput(String),
    /// Every character set is disabled, so there is nothing to draw from.
    NoCharacterSetSelected,
}

impl GeneratorError {
    /// Both variants are invalid input; the second is just the registry-level form.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GeneratorError::InvalidInput(_) | GeneratorError::NoCharacterSetSelected
        )
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GeneratorError::NoCharacterSetSelected => {
                write!(f, "Invalid input: no character set selected")
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// === CharsetError ===

/// Errors related to the character-set registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// No character set with the given ID exists.
    NotFound(String),
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharsetError::NotFound(id) => write!(f, "Character set not found: {}", id),
        }
    }
}

impl std::error::Error for CharsetError {}

// === StorageError ===

/// Errors from a key-value store backend.
#[derive(Debug)]
pub enum StorageError {
    /// The backing file or database could not be read or written.
    Unavailable(String),
    /// The stored data could not be encoded or decoded.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Unavailable(e.to_string())
    }
}

// === HistoryError ===

/// Errors related to the history log.
#[derive(Debug)]
pub enum HistoryError {
    /// The durable mirror could not be read or written. In-memory history is unaffected.
    PersistenceUnavailable(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::PersistenceUnavailable(msg) => {
                write!(f, "History persistence unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<StorageError> for HistoryError {
    fn from(e: StorageError) -> Self {
        HistoryError::PersistenceUnavailable(e.to_string())
    }
}

// === ClipboardError ===

/// Errors related to copying to the system clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// Clipboard access was denied or is not supported here.
    Unavailable(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
