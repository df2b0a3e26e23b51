//! String-keyed persistence contract.

use std::collections::HashMap;

use crate::error::Result;

/// Key for the persisted progress map.
pub const PROGRESS_KEY: &str = "kartubahasa_noun_progress";
/// Key for the persisted aggregate stats record.
pub const STATS_KEY: &str = "kartubahasa_user_stats";
/// Key for the persisted level selection.
pub const SETTINGS_KEY: &str = "kartubahasa_settings";

/// Durable string-keyed store with plain get/set semantics.
///
/// Implementations only have to behave like a persistent string map; the
/// repository layer owns the record encoding. Backend failures surface as
/// [`CoreError::Storage`](crate::CoreError::Storage).
pub trait KeyValue {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one under the same key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
