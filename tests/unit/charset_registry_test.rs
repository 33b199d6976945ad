//! Unit tests for the character-set registry.

use strgen::managers::charset_registry::{CharsetRegistry, CharsetRegistryTrait};
use strgen::types::charset::{CharacterSet, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
use strgen::types::errors::CharsetError;

#[test]
fn test_defaults_enable_letters_and_numbers() {
    let registry = CharsetRegistry::new();
    let ids: Vec<&str> = registry.list().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["uppercase", "lowercase", "numbers", "symbols"]);
    assert_eq!(
        registry.effective_alphabet(),
        format!("{}{}{}", UPPERCASE, LOWERCASE, NUMBERS)
    );
    assert_eq!(
        registry.active_labels(),
        vec!["Uppercase (A-Z)", "Lowercase (a-z)", "Numbers (0-9)"]
    );
}

#[test]
fn test_alphabet_follows_definition_order_not_toggle_order() {
    let mut registry = CharsetRegistry::new();
    for id in ["uppercase", "lowercase", "numbers"] {
        registry.toggle(id, false).unwrap();
    }
    registry.toggle("symbols", true).unwrap();
    registry.toggle("uppercase", true).unwrap();

    assert_eq!(registry.effective_alphabet(), format!("{}{}", UPPERCASE, SYMBOLS));
    assert_eq!(
        registry.active_labels(),
        vec!["Uppercase (A-Z)", "Symbols (!@#$...)"]
    );
}

#[test]
fn test_redundant_toggle_is_idempotent() {
    let mut registry = CharsetRegistry::new();
    let before = registry.effective_alphabet();

    registry.toggle("uppercase", true).unwrap();
    registry.toggle("uppercase", true).unwrap();
    assert_eq!(registry.effective_alphabet(), before);

    registry.toggle("symbols", false).unwrap();
    assert_eq!(registry.effective_alphabet(), before);
}

#[test]
fn test_unknown_id_reports_not_found() {
    let mut registry = CharsetRegistry::new();
    let before = registry.effective_alphabet();

    match registry.toggle("emoji", true) {
        Err(CharsetError::NotFound(id)) => assert_eq!(id, "emoji"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(registry.effective_alphabet(), before);
}

#[test]
fn test_all_disabled_yields_empty_alphabet() {
    let mut registry = CharsetRegistry::new();
    for id in ["uppercase", "lowercase", "numbers", "symbols"] {
        registry.toggle(id, false).unwrap();
    }
    assert!(!registry.has_enabled());
    assert_eq!(registry.effective_alphabet(), "");
    assert!(registry.active_labels().is_empty());
}

#[test]
fn test_shared_characters_are_not_deduplicated() {
    let mut registry = CharsetRegistry::with_sets(vec![
        CharacterSet::new("hex", "Hex", "0123456789abcdef", true),
        CharacterSet::new("digits", "Digits", "0123456789", true),
    ]);
    let alphabet = registry.effective_alphabet();
    assert_eq!(alphabet, "0123456789abcdef0123456789");
    assert_eq!(alphabet.matches('7').count(), 2);

    registry.toggle("digits", false).unwrap();
    assert_eq!(registry.effective_alphabet(), "0123456789abcdef");
}

#[test]
fn test_with_sets_drops_empty_sets() {
    let registry = CharsetRegistry::with_sets(vec![
        CharacterSet::new("empty", "Empty", "", true),
        CharacterSet::new("ab", "AB", "ab", true),
    ]);
    assert_eq!(registry.list().len(), 1);
    assert!(registry.get("empty").is_none());
}

#[test]
fn test_apply_enabled_sets_exact_selection() {
    let mut registry = CharsetRegistry::new();
    registry.apply_enabled(&["numbers".to_string(), "nonexistent".to_string()]);
    assert_eq!(registry.enabled_ids(), vec!["numbers".to_string()]);
    assert_eq!(registry.effective_alphabet(), NUMBERS);
}

#[test]
fn test_preview_truncates_long_sets() {
    let registry = CharsetRegistry::new();
    let upper = registry.get("uppercase").unwrap();
    assert_eq!(upper.preview(), "ABCDEFGHIJKLMNOPQRST...");
    let numbers = registry.get("numbers").unwrap();
    assert_eq!(numbers.preview(), "0123456789");
}
