//! SQLite-backed key-value store.
//!
//! Wraps a `rusqlite::Connection` and runs schema migrations on open. All
//! scopes share one `kv` table keyed by `(scope, key)`.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::migrations;
use super::KeyValueStore;
use crate::types::errors::StorageError;

pub struct SqliteStore {
    conn: Connection,
    scope: String,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at the given path and runs migrations.
    ///
    /// # Errors
    /// Returns `StorageError::Unavailable` if the connection cannot be established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P, scope: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, scope)
    }

    /// Opens an in-memory database. It is discarded when the store is dropped.
    pub fn open_in_memory(scope: &str) -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, scope)
    }

    fn with_connection(conn: Connection, scope: &str) -> Result<Self, StorageError> {
        migrations::run_all(&conn)?;
        Ok(Self {
            conn,
            scope: scope.to_string(),
        })
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn scope(&self) -> &str {
        &self.scope
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE scope = ?1 AND key = ?2",
                params![self.scope, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv (scope, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(scope, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.scope, key, value, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "DELETE FROM kv WHERE scope = ?1 AND key = ?2",
            params![self.scope, key],
        )?;
        Ok(())
    }
}
