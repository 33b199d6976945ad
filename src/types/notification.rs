use serde::{Deserialize, Serialize};

use super::errors::GeneratorError;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A user-facing outcome message. Presentation is up to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }

    pub fn generated(length: usize) -> Self {
        Self::new(
            "String generated!",
            &format!("Generated {}-character string", length),
            Severity::Success,
        )
    }

    pub fn no_character_sets() -> Self {
        Self::new(
            "No character sets selected",
            "Please select at least one character set to generate strings",
            Severity::Error,
        )
    }

    pub fn invalid_input(message: &str) -> Self {
        Self::new("Invalid input", message, Severity::Error)
    }

    pub fn copied() -> Self {
        Self::new("Copied!", "String copied to clipboard", Severity::Success)
    }

    pub fn copy_failed() -> Self {
        Self::new("Copy failed", "Could not copy to clipboard", Severity::Error)
    }

    pub fn history_cleared() -> Self {
        Self::new(
            "History cleared",
            "All generated strings have been removed",
            Severity::Info,
        )
    }

    pub fn persistence_unavailable() -> Self {
        Self::new(
            "History not saved",
            "Generated strings will be kept for this session only",
            Severity::Error,
        )
    }
}

impl From<&GeneratorError> for Notification {
    fn from(err: &GeneratorError) -> Self {
        match err {
            GeneratorError::NoCharacterSetSelected => Notification::no_character_sets(),
            GeneratorError::InvalidInput(msg) => Notification::invalid_input(msg),
        }
    }
}
