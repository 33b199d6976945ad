//! Character-Set Registry.
//!
//! Tracks which character classes are enabled and computes the effective
//! alphabet handed to the generator.

use crate::types::charset::{default_character_sets, CharacterSet};
use crate::types::errors::CharsetError;

/// Trait defining character-set registry operations.
pub trait CharsetRegistryTrait {
    fn toggle(&mut self, id: &str, enabled: bool) -> Result<(), CharsetError>;
    fn effective_alphabet(&self) -> String;
    fn active_labels(&self) -> Vec<String>;
    fn has_enabled(&self) -> bool;
    fn list(&self) -> &[CharacterSet];
    fn get(&self, id: &str) -> Option<&CharacterSet>;
}

/// Registry over a fixed list of character sets, kept in definition order.
#[derive(Debug, Clone)]
pub struct CharsetRegistry {
    sets: Vec<CharacterSet>,
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CharsetRegistry {
    /// Creates a registry with the four default sets.
    pub fn new() -> Self {
        Self {
            sets: default_character_sets(),
        }
    }

    /// Creates a registry over custom sets. Sets with no characters are dropped.
    pub fn with_sets(sets: Vec<CharacterSet>) -> Self {
        let sets = sets
            .into_iter()
            .filter(|set| {
                if set.characters.is_empty() {
                    tracing::warn!(id = %set.id, "ignoring character set with no characters");
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { sets }
    }

    /// Enables exactly the sets named in `ids` and disables the rest.
    /// Unknown ids are skipped.
    pub fn apply_enabled(&mut self, ids: &[String]) {
        for id in ids {
            if self.get(id).is_none() {
                tracing::warn!(id = %id, "unknown character set in settings");
            }
        }
        for set in &mut self.sets {
            set.enabled = ids.iter().any(|id| *id == set.id);
        }
    }

    /// Ids of the currently enabled sets, in registry order.
    pub fn enabled_ids(&self) -> Vec<String> {
        self.sets
            .iter()
            .filter(|set| set.enabled)
            .map(|set| set.id.clone())
            .collect()
    }
}

impl CharsetRegistryTrait for CharsetRegistry {
    /// Sets the enabled flag for `id`. Setting it to its current value is a no-op.
    fn toggle(&mut self, id: &str, enabled: bool) -> Result<(), CharsetError> {
        let set = self
            .sets
            .iter_mut()
            .find(|set| set.id == id)
            .ok_or_else(|| CharsetError::NotFound(id.to_string()))?;
        set.enabled = enabled;
        tracing::debug!(id, enabled, "character set toggled");
        Ok(())
    }

    /// Concatenates the characters of every enabled set, in registry order.
    ///
    /// Characters shared by two enabled sets appear twice and so carry twice
    /// the selection weight.
    fn effective_alphabet(&self) -> String {
        self.sets
            .iter()
            .filter(|set| set.enabled)
            .map(|set| set.characters.as_str())
            .collect()
    }

    fn active_labels(&self) -> Vec<String> {
        self.sets
            .iter()
            .filter(|set| set.enabled)
            .map(|set| set.label.clone())
            .collect()
    }

    fn has_enabled(&self) -> bool {
        self.sets.iter().any(|set| set.enabled)
    }

    fn list(&self) -> &[CharacterSet] {
        &self.sets
    }

    fn get(&self, id: &str) -> Option<&CharacterSet> {
        self.sets.iter().find(|set| set.id == id)
    }
}
