//! SQLite-backed implementation of the core's string-keyed store.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use vocab_core::{CoreError, KeyValue};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Durable string-keyed store over a single SQLite table.
pub struct SqliteKeyValue {
    conn: Connection,
}

impl SqliteKeyValue {
    /// Open the database at `path`, creating it if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        Self::from_connection(Connection::open(path).map_err(storage_err)?)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, CoreError> {
        Self::from_connection(Connection::open_in_memory().map_err(storage_err)?)
    }

    fn from_connection(conn: Connection) -> Result<Self, CoreError> {
        conn.execute_batch(SCHEMA).map_err(storage_err)?;
        Ok(Self { conn })
    }
}

fn storage_err(err: rusqlite::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

impl KeyValue for SqliteKeyValue {
    fn get(&self, key: &str) -> vocab_core::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(storage_err)
    }

    fn set(&mut self, key: &str, value: &str) -> vocab_core::Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(storage_err)?;
        Ok(())
    }
}
