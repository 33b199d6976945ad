//! Unit tests for the App session: generation, history, clipboard, notifications.

use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;

use strgen::app::App;
use strgen::services::clipboard::MemoryClipboard;
use strgen::services::scheduler::ImmediateScheduler;
use strgen::services::settings_engine::SettingsEngine;
use strgen::storage::{JsonFileStore, MemoryStore};
use strgen::types::errors::{CharsetError, GeneratorError};
use strgen::types::notification::{Notification, Severity};
use strgen::types::settings::{AppSettings, StorageBackend};

fn engine(settings: AppSettings) -> SettingsEngine {
    SettingsEngine::with_settings("/nonexistent/settings.json".to_string(), settings)
}

fn memory_app() -> (App, MemoryClipboard, ImmediateScheduler) {
    let clipboard = MemoryClipboard::new();
    let scheduler = ImmediateScheduler::new();
    let app = App::with_parts(
        engine(AppSettings::default()),
        Box::new(MemoryStore::new("test")),
        Box::new(clipboard.clone()),
        Box::new(scheduler.clone()),
    );
    (app, clipboard, scheduler)
}

fn file_app(dir: &TempDir) -> App {
    App::with_parts(
        engine(AppSettings::default()),
        Box::new(JsonFileStore::new(dir.path(), "strgen")),
        Box::new(MemoryClipboard::new()),
        Box::new(ImmediateScheduler::new()),
    )
}

#[test]
fn test_generate_uses_default_length_and_records_labels() {
    let (mut app, _, _) = memory_app();
    let generated = app.generate(None).unwrap();

    assert_eq!(generated.record.length, 12);
    assert_eq!(generated.record.value.chars().count(), 12);
    assert!(generated.record.value.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        generated.record.character_sets,
        vec!["Uppercase (A-Z)", "Lowercase (a-z)", "Numbers (0-9)"]
    );
    assert!(generated.persisted);
    assert_eq!(generated.notification, Notification::generated(12));
    assert_eq!(generated.notification.description, "Generated 12-character string");
    assert_eq!(app.current_value(), Some(generated.record.value.as_str()));
}

#[test]
fn test_uppercase_only_scenario() {
    let (mut app, _, _) = memory_app();
    app.toggle_character_set("lowercase", false).unwrap();
    app.toggle_character_set("numbers", false).unwrap();

    let generated = app.generate(Some(5)).unwrap();
    assert_eq!(generated.record.value.len(), 5);
    assert!(generated.record.value.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(generated.record.character_sets, vec!["Uppercase (A-Z)"]);
}

#[test]
fn test_all_disabled_refuses_without_touching_history() {
    let (mut app, _, _) = memory_app();
    for id in ["uppercase", "lowercase", "numbers", "symbols"] {
        app.toggle_character_set(id, false).unwrap();
    }

    let err = app.generate(Some(8)).unwrap_err();
    assert_eq!(err, GeneratorError::NoCharacterSetSelected);
    assert!(err.is_invalid_input());
    assert!(app.history_entries().is_empty());
    assert!(app.current_value().is_none());

    let toast = Notification::from(&err);
    assert_eq!(toast.title, "No character sets selected");
    assert_eq!(toast.severity, Severity::Error);
}

#[test]
fn test_length_outside_bounds_is_invalid_input() {
    let (mut app, _, _) = memory_app();
    assert!(matches!(app.generate(Some(0)), Err(GeneratorError::InvalidInput(_))));
    assert!(matches!(app.generate(Some(129)), Err(GeneratorError::InvalidInput(_))));
    assert!(app.history_entries().is_empty());

    assert!(app.set_length(128).is_ok());
    assert_eq!(app.length(), 128);
    assert!(app.set_length(0).is_err());
    assert_eq!(app.length(), 128);
}

#[test]
fn test_twenty_five_generations_keep_twenty_most_recent() {
    let (mut app, _, _) = memory_app();
    let mut generated = Vec::new();
    for _ in 0..25 {
        generated.push(app.generate(Some(6)).unwrap().record);
    }

    let history = app.history_entries();
    assert_eq!(history.len(), 20);
    let expected: Vec<String> = generated.iter().rev().take(20).map(|r| r.id.clone()).collect();
    let actual: Vec<String> = history.iter().map(|r| r.id.clone()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_history_survives_restart_and_clear_sticks() {
    let dir = TempDir::new().unwrap();
    let first = {
        let mut app = file_app(&dir);
        app.generate(Some(10)).unwrap();
        app.generate(Some(4)).unwrap();
        app.history_entries()
    };

    let mut app = file_app(&dir);
    assert_eq!(app.history_entries(), first);

    let toast = app.clear_history();
    assert_eq!(toast, Notification::history_cleared());
    assert!(app.history_entries().is_empty());

    let app = file_app(&dir);
    assert!(app.history_entries().is_empty());
}

#[test]
fn test_copy_reports_success_and_failure() {
    let (mut app, clipboard, _) = memory_app();
    let generated = app.generate(None).unwrap();

    assert_eq!(app.copy_entry(None), Notification::copied());
    assert_eq!(clipboard.contents(), Some(generated.record.value.clone()));

    assert_eq!(app.copy_entry(Some(&generated.record.id)), Notification::copied());
    assert_eq!(app.copy_entry(Some("missing")), Notification::copy_failed());

    let mut denied = App::with_parts(
        engine(AppSettings::default()),
        Box::new(MemoryStore::new("test")),
        Box::new(MemoryClipboard::denied()),
        Box::new(ImmediateScheduler::new()),
    );
    let toast = denied.copy("abc");
    assert_eq!(toast.title, "Copy failed");
    assert_eq!(toast.severity, Severity::Error);
}

#[test]
fn test_configured_delay_goes_through_scheduler() {
    let mut settings = AppSettings::default();
    settings.generator.delay_ms = 300;
    let scheduler = ImmediateScheduler::new();
    let mut app = App::with_parts(
        engine(settings),
        Box::new(MemoryStore::new("test")),
        Box::new(MemoryClipboard::new()),
        Box::new(scheduler.clone()),
    );

    app.generate(None).unwrap();
    assert_eq!(scheduler.requested(), vec![Duration::from_millis(300)]);

    app.toggle_character_set("uppercase", false).unwrap();
    app.toggle_character_set("lowercase", false).unwrap();
    app.toggle_character_set("numbers", false).unwrap();
    assert!(app.generate(None).is_err());
    assert_eq!(scheduler.requested().len(), 1, "refused generation must not pause");
}

#[test]
fn test_enabled_sets_come_from_settings() {
    let mut settings = AppSettings::default();
    settings.generator.enabled_sets = vec!["symbols".to_string()];
    let mut app = App::with_parts(
        engine(settings),
        Box::new(MemoryStore::new("test")),
        Box::new(MemoryClipboard::new()),
        Box::new(ImmediateScheduler::new()),
    );

    let value = app.generate(Some(20)).unwrap().record.value;
    assert!(value.chars().all(|c| strgen::types::charset::SYMBOLS.contains(c)));
}

#[test]
fn test_toggle_unknown_set() {
    let (mut app, _, _) = memory_app();
    assert_eq!(
        app.toggle_character_set("emoji", true),
        Err(CharsetError::NotFound("emoji".to_string()))
    );
}

#[test]
fn test_unopenable_store_reports_nothing_persisted() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut settings = AppSettings::default();
    settings.storage.backend = StorageBackend::Sqlite;
    settings.storage.path = Some(blocker.join("strgen.db").to_string_lossy().to_string());
    let settings_path = tmp.path().join("settings.json");
    std::fs::write(&settings_path, serde_json::to_string(&settings).unwrap()).unwrap();
    let settings_path = settings_path.to_string_lossy().to_string();

    let mut app = App::new(Some(settings_path.clone())).unwrap();
    assert!(!app.is_durable());

    let generated = app.generate(Some(6)).unwrap();
    assert!(!generated.persisted);
    assert_eq!(app.history_entries().len(), 1);
    assert_eq!(app.clear_history(), Notification::persistence_unavailable());

    app.generate(Some(6)).unwrap();
    let restarted = App::new(Some(settings_path)).unwrap();
    assert!(restarted.history_entries().is_empty());
}

#[test]
fn test_durable_store_reports_persisted() {
    let dir = TempDir::new().unwrap();
    let mut app = file_app(&dir);
    assert!(app.is_durable());
    assert!(app.generate(Some(6)).unwrap().persisted);
}

fn saved_settings_app(dir: &TempDir) -> App {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    App::with_parts(
        SettingsEngine::with_settings(path, AppSettings::default()),
        Box::new(MemoryStore::new("test")),
        Box::new(MemoryClipboard::new()),
        Box::new(ImmediateScheduler::new()),
    )
}

#[test]
fn test_narrowed_bounds_reset_session_length() {
    let dir = TempDir::new().unwrap();
    let mut app = saved_settings_app(&dir);
    app.set_length(100).unwrap();

    app.update_setting("generator.max_length", json!(64)).unwrap();
    assert_eq!(app.length(), 12);
    assert_eq!(app.generate(None).unwrap().record.length, 12);

    app.set_length(40).unwrap();
    app.update_setting("generator.max_length", json!(50)).unwrap();
    assert_eq!(app.length(), 40, "length still inside the bounds is kept");
}

#[test]
fn test_generator_settings_reach_the_session() {
    let dir = TempDir::new().unwrap();
    let mut app = saved_settings_app(&dir);

    app.update_setting("generator.default_length", json!(30)).unwrap();
    assert_eq!(app.length(), 30);

    app.update_setting("generator.enabled_sets", json!(["numbers"])).unwrap();
    let value = app.generate(None).unwrap().record.value;
    assert_eq!(value.chars().count(), 30);
    assert!(value.chars().all(|c| c.is_ascii_digit()));

    assert!(app.update_setting("generator.max_length", json!(10)).is_err());
    assert_eq!(app.settings().generator.max_length, 128);
    assert_eq!(app.length(), 30);
}
