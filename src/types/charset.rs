use serde::{Deserialize, Serialize};

/// A named, enableable collection of characters eligible for random selection.
///
/// `characters` is fixed when the set is defined; only `enabled` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSet {
    pub id: String,
    pub label: String,
    pub characters: String,
    pub enabled: bool,
}

impl CharacterSet {
    pub fn new(id: &str, label: &str, characters: &str, enabled: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            characters: characters.to_string(),
            enabled,
        }
    }

    /// Short preview of the member characters, truncated after 20 chars.
    pub fn preview(&self) -> String {
        let mut preview: String = self.characters.chars().take(20).collect();
        if self.characters.chars().count() > 20 {
            preview.push_str("...");
        }
        preview
    }
}

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The four sets every registry starts with, in definition order.
pub fn default_character_sets() -> Vec<CharacterSet> {
    vec![
        CharacterSet::new("uppercase", "Uppercase (A-Z)", UPPERCASE, true),
        CharacterSet::new("lowercase", "Lowercase (a-z)", LOWERCASE, true),
        CharacterSet::new("numbers", "Numbers (0-9)", NUMBERS, true),
        CharacterSet::new("symbols", "Symbols (!@#$...)", SYMBOLS, false),
    ]
}
