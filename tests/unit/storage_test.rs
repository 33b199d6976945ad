//! Unit tests for the key-value store backends.

use rstest::rstest;
use tempfile::TempDir;

use strgen::storage::{
    open_store, open_store_or_memory, JsonFileStore, KeyValueStore, MemoryStore, SqliteStore,
};
use strgen::types::settings::{StorageBackend, StorageSettings};

fn exercise(store: &mut dyn KeyValueStore) {
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "v1").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

    store.set("other", "x").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));

    // Removing twice is fine.
    store.remove("k").unwrap();
}

#[test]
fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::new("s");
    assert!(store.is_empty());
    exercise(&mut store);
    assert_eq!(store.scope(), "s");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_unopenable_store_falls_back_to_memory() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let settings = StorageSettings {
        backend: StorageBackend::Sqlite,
        path: Some(blocker.join("strgen.db").to_string_lossy().to_string()),
        scope: "strgen".to_string(),
    };
    assert!(open_store(&settings).is_err());

    let (mut store, durable) = open_store_or_memory(&settings);
    assert!(!durable);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

    let (_, durable) = open_store_or_memory(&StorageSettings {
        backend: StorageBackend::Memory,
        path: None,
        scope: "strgen".to_string(),
    });
    assert!(durable);
}

#[test]
fn test_file_store_roundtrip() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path(), "s");
    exercise(&mut store);
}

#[test]
fn test_sqlite_store_roundtrip() {
    let mut store = SqliteStore::open_in_memory("s").unwrap();
    exercise(&mut store);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = JsonFileStore::new(dir.path(), "s");
        store.set("greeting", "hello").unwrap();
    }
    let store = JsonFileStore::new(dir.path(), "s");
    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kv.db");
    {
        let mut store = SqliteStore::open(&path, "s").unwrap();
        store.set("greeting", "hello").unwrap();
    }
    let store = SqliteStore::open(&path, "s").unwrap();
    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_scopes_are_isolated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kv.db");

    let mut a = SqliteStore::open(&path, "a").unwrap();
    let mut b = SqliteStore::open(&path, "b").unwrap();
    a.set("k", "from-a").unwrap();
    b.set("k", "from-b").unwrap();
    assert_eq!(a.get("k").unwrap().as_deref(), Some("from-a"));
    b.remove("k").unwrap();
    assert_eq!(a.get("k").unwrap().as_deref(), Some("from-a"));

    let mut fa = JsonFileStore::new(dir.path(), "a");
    let fb = JsonFileStore::new(dir.path(), "b");
    fa.set("k", "v").unwrap();
    assert_eq!(fb.get("k").unwrap(), None);
}

#[rstest]
#[case(StorageBackend::Memory)]
#[case(StorageBackend::File)]
#[case(StorageBackend::Sqlite)]
fn test_open_store_for_each_backend(#[case] backend: StorageBackend) {
    let dir = TempDir::new().unwrap();
    let path = match backend {
        StorageBackend::Sqlite => dir.path().join("nested").join("strgen.db"),
        _ => dir.path().to_path_buf(),
    };
    let settings = StorageSettings {
        backend,
        path: Some(path.to_string_lossy().to_string()),
        scope: "strgen".to_string(),
    };

    let mut store = open_store(&settings).unwrap();
    assert_eq!(store.scope(), "strgen");
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
