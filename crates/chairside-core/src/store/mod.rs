//! Key-value persistence layer.
//!
//! A typed get/set/remove over a single SQLite table: one durable local
//! file, synchronous writes, JSON documents as values. `get` degrades to
//! absent on any read or decode failure, so callers treat `None` as "not
//! yet initialized" and fall back to seed data.

mod schema;

pub use schema::SCHEMA;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Version stamped into `store_meta` when a store file is created.
pub const SCHEMA_VERSION: &str = "1";

/// Keys for the persisted records.
pub mod keys {
    /// Credential directory: list of `User`, passwords included.
    pub const USERS: &str = "users";
    /// Active session (password-less), absent when logged out.
    pub const SESSION: &str = "session_user";
    /// Patient collection.
    pub const PATIENTS: &str = "patients";
    /// Incident collection.
    pub const INCIDENTS: &str = "incidents";
}

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store over a local SQLite file.
pub struct KvStore {
    conn: Mutex<Connection>,
}

impl KvStore {
    /// Open the store at path, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.check_schema_version();
        Ok(store)
    }

    // Single conceptual writer; a poisoned lock only means a caller
    // panicked mid-call, the connection itself is still usable.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_schema_version(&self) {
        let found: Option<String> = self
            .conn()
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |row| row.get(0),
            )
            .optional()
            .ok()
            .flatten();

        match found.as_deref() {
            Some(SCHEMA_VERSION) => {}
            other => tracing::warn!(
                "store schema version {:?} does not match {}; undecodable records will be re-seeded",
                other,
                SCHEMA_VERSION
            ),
        }
    }

    /// Read and decode the value under `key`.
    ///
    /// A missing row, an unreadable store, and an undecodable value all
    /// yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let row: Option<String> = match self
            .conn()
            .query_row("SELECT value FROM kv_records WHERE key = ?", [key], |r| {
                r.get(0)
            })
            .optional()
        {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!("read of {:?} failed: {}", key, e);
                return None;
            }
        };

        let raw = row?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("value under {:?} is not decodable: {}", key, e);
                None
            }
        }
    }

    /// Serialize `value` and durably write it under `key`, replacing any
    /// previous record.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.conn().execute(
            r#"
            INSERT INTO kv_records (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![key, json],
        )?;
        Ok(())
    }

    /// Remove the record under `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        self.conn()
            .execute("DELETE FROM kv_records WHERE key = ?", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_open_in_memory() {
        let store = KvStore::open_in_memory();
        assert!(store.is_ok());
    }

    #[test]
    fn test_missing_key_is_absent() {
        let store = KvStore::open_in_memory().unwrap();
        let value: Option<Vec<String>> = store.get("nothing-here");
        assert!(value.is_none());
    }

    #[test]
    fn test_set_get_roundtrip_model_types() {
        let store = KvStore::open_in_memory().unwrap();

        let patients = seed::seed_patients();
        let incidents = seed::seed_incidents();
        store.set(keys::PATIENTS, &patients).unwrap();
        store.set(keys::INCIDENTS, &incidents).unwrap();

        assert_eq!(store.get(keys::PATIENTS), Some(patients));
        assert_eq!(store.get(keys::INCIDENTS), Some(incidents));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = KvStore::open_in_memory().unwrap();
        store.set("counter", &1u32).unwrap();
        store.set("counter", &2u32).unwrap();
        assert_eq!(store.get::<u32>("counter"), Some(2));
    }

    #[test]
    fn test_undecodable_value_is_absent() {
        let store = KvStore::open_in_memory().unwrap();
        store.set("patients-like", &"not a list").unwrap();

        let value: Option<Vec<crate::models::Patient>> = store.get("patients-like");
        assert!(value.is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = KvStore::open_in_memory().unwrap();
        store.set("k", &"v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get::<String>("k"), None);
    }
}
