//! App Core for strgen.
//!
//! One `App` is one generator session: the character-set registry, the
//! history log with its durable mirror, and the clipboard and scheduler
//! collaborators. Control flows registry → generator → history.

use std::time::Duration;

use crate::managers::charset_registry::{CharsetRegistry, CharsetRegistryTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::clipboard::{default_clipboard, ClipboardService};
use crate::services::generator;
use crate::services::scheduler::{Scheduler, ThreadScheduler};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{self, BoxedStore};
use crate::types::charset::CharacterSet;
use crate::types::errors::{CharsetError, GeneratorError, SettingsError};
use crate::types::history::GeneratedRecord;
use crate::types::notification::Notification;
use crate::types::settings::AppSettings;

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct Generated {
    pub record: GeneratedRecord,
    pub notification: Notification,
    /// False when the record could not be written to the durable mirror, or
    /// the session has no durable mirror at all. It is still in the in-memory
    /// history.
    pub persisted: bool,
}

/// Central session struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub registry: CharsetRegistry,
    pub history: HistoryManager,
    clipboard: Box<dyn ClipboardService + Send>,
    scheduler: Box<dyn Scheduler + Send>,
    length: usize,
    current: Option<String>,
    /// False when the history only lives in memory for this session.
    durable: bool,
}

impl App {
    /// Creates a session from the settings file (platform default when `None`).
    ///
    /// A store that cannot be opened degrades to in-memory history for the
    /// session; malformed settings are an error.
    pub fn new(settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        let (store, durable) = storage::open_store_or_memory(&settings.storage);

        let app = Self::with_parts(
            settings_engine,
            store,
            default_clipboard(),
            Box::new(ThreadScheduler),
        );
        Ok(if durable { app } else { app.with_volatile_history() })
    }

    /// Assembles a session from explicit collaborators and loads the persisted history.
    pub fn with_parts(
        settings_engine: SettingsEngine,
        store: BoxedStore,
        clipboard: Box<dyn ClipboardService + Send>,
        scheduler: Box<dyn Scheduler + Send>,
    ) -> Self {
        let settings = settings_engine.get_settings().clone();

        let mut registry = CharsetRegistry::new();
        registry.apply_enabled(&settings.generator.enabled_sets);

        let history = HistoryManager::open(store);
        tracing::debug!(entries = history.len(), "session started");

        Self {
            settings_engine,
            registry,
            history,
            clipboard,
            scheduler,
            length: settings.generator.default_length,
            current: None,
            durable: true,
        }
    }

    /// Marks the history store as a stand-in for a mirror that could not be
    /// opened. Generations then report `persisted = false`.
    pub fn with_volatile_history(mut self) -> Self {
        self.durable = false;
        self
    }

    /// Whether history written in this session survives a restart.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    pub fn settings(&self) -> &AppSettings {
        self.settings_engine.get_settings()
    }

    /// Length used when `generate` is called without one.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), GeneratorError> {
        self.check_length(length)?;
        self.length = length;
        Ok(())
    }

    /// Updates one setting by dot-notation key and carries it into the session.
    ///
    /// A new `generator.default_length` becomes the session length, new
    /// `generator.enabled_sets` replace the enabled sets, and a session length
    /// left outside changed bounds is reset to the default length.
    pub fn update_setting(
        &mut self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        let generator = self.settings().generator.clone();

        if key == "generator" || key == "generator.default_length" {
            self.length = generator.default_length;
        }
        if key == "generator" || key == "generator.enabled_sets" {
            self.registry.apply_enabled(&generator.enabled_sets);
        }
        if self.check_length(self.length).is_err() {
            tracing::info!(
                from = self.length,
                to = generator.default_length,
                "session length outside new bounds, reset to default"
            );
            self.length = generator.default_length;
        }
        Ok(())
    }

    fn check_length(&self, length: usize) -> Result<(), GeneratorError> {
        let g = &self.settings().generator;
        if length < g.min_length || length > g.max_length {
            return Err(GeneratorError::InvalidInput(format!(
                "length must be between {} and {}, got {}",
                g.min_length, g.max_length, length
            )));
        }
        Ok(())
    }

    pub fn character_sets(&self) -> &[CharacterSet] {
        self.registry.list()
    }

    pub fn toggle_character_set(&mut self, id: &str, enabled: bool) -> Result<(), CharsetError> {
        self.registry.toggle(id, enabled)
    }

    /// Generates one string and records it at the head of the history.
    ///
    /// Nothing is recorded when the length is out of range or no character
    /// set is enabled.
    pub fn generate(&mut self, length: Option<usize>) -> Result<Generated, GeneratorError> {
        let length = length.unwrap_or(self.length);
        self.check_length(length)?;

        let alphabet = self.registry.effective_alphabet();
        if alphabet.is_empty() {
            tracing::info!("generation refused: no character set selected");
            return Err(GeneratorError::NoCharacterSetSelected);
        }

        let delay = self.settings().generator.delay_ms;
        self.scheduler.pause(Duration::from_millis(delay));

        let value = generator::generate(length, &alphabet)?;
        let record = GeneratedRecord::new(value.clone(), length, self.registry.active_labels());
        tracing::debug!(id = %record.id, length, "string generated");

        let appended = self.history.append(record.clone()).is_ok();
        let persisted = appended && self.durable;
        if !self.durable {
            tracing::debug!(id = %record.id, "history kept in memory only");
        }
        self.current = Some(value);

        Ok(Generated {
            record,
            notification: Notification::generated(length),
            persisted,
        })
    }

    /// Most recently generated value in this session.
    pub fn current_value(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn history_entries(&self) -> Vec<GeneratedRecord> {
        self.history.entries()
    }

    /// Copies `text` and reports the outcome.
    pub fn copy(&mut self, text: &str) -> Notification {
        match self.clipboard.copy(text) {
            Ok(()) => Notification::copied(),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                Notification::copy_failed()
            }
        }
    }

    /// Copies the value of a history entry, or the current value when `id` is `None`.
    pub fn copy_entry(&mut self, id: Option<&str>) -> Notification {
        let text = match id {
            Some(id) => self.history.get(id).map(|r| r.value.clone()),
            None => self.current.clone(),
        };
        match text {
            Some(text) => self.copy(&text),
            None => Notification::copy_failed(),
        }
    }

    /// Clears the history and its durable mirror.
    pub fn clear_history(&mut self) -> Notification {
        match self.history.clear() {
            Ok(()) if !self.durable => Notification::persistence_unavailable(),
            Ok(()) => Notification::history_cleared(),
            Err(e) => {
                tracing::warn!(error = %e, "history cleared in memory only");
                Notification::persistence_unavailable()
            }
        }
    }
}
