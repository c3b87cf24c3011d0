//! SQLite-backed key-value store.

use super::{KeyValueStore, KvError, KvResult};
use crate::db::{open_db, open_db_in_memory, DbResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Durable store over the migrated `kv` table.
///
/// Statements are short single-row operations, so they run inline on the
/// caller's task while holding the connection lock.
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> KvResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| KvError::LockPoisoned)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        let conn = self.lock()?;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> KvResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> KvResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let placeholders = vec!["?"; keys.len()].join(", ");
        let conn = self.lock()?;
        conn.execute(
            &format!("DELETE FROM kv WHERE key IN ({placeholders});"),
            params_from_iter(keys.iter().map(|key| Value::Text((*key).to_string()))),
        )?;
        Ok(())
    }
}
