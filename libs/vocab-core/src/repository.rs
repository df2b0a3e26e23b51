//! Keyed-record repository over a [`KeyValue`] store.
//!
//! Three independent records share one store: the progress map, the stats
//! record, and the level selection. Every mutation is a read-modify-write of
//! the whole record with no transactional guarantee; with concurrent writers
//! the last write on a key wins, so callers serialize access. Unreadable or
//! malformed records are replaced by their documented defaults and never
//! surfaced as errors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::progress::{self, ProgressStore};
use crate::settings::SettingsStore;
use crate::stats::{self, StatsTracker};
use crate::store::{KeyValue, PROGRESS_KEY, SETTINGS_KEY, STATS_KEY};
use crate::types::{AppSettings, NounProgress, ProgressMap, UserStats};

/// Single implementation of all three stores over one string-keyed backend.
pub struct KvRepository<S> {
    store: S,
}

impl<S: KeyValue> KvRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load_or<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> T) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|_| fallback()),
            Ok(None) | Err(_) => fallback(),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw =
            serde_json::to_string(value).map_err(|err| CoreError::Storage(err.to_string()))?;
        self.store.set(key, &raw)
    }
}

impl<S: KeyValue> ProgressStore for KvRepository<S> {
    fn progress(&self, noun_id: &str) -> Option<NounProgress> {
        self.progress_map().remove(noun_id)
    }

    fn progress_map(&self) -> ProgressMap {
        self.load_or(PROGRESS_KEY, ProgressMap::new)
    }

    fn record_answer(
        &mut self,
        noun_id: &str,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> Result<NounProgress> {
        let mut map = self.progress_map();
        let updated = progress::apply_answer(map.remove(noun_id), noun_id, was_correct, now);
        map.insert(noun_id.to_string(), updated.clone());
        self.save(PROGRESS_KEY, &map)?;
        Ok(updated)
    }
}

impl<S: KeyValue> StatsTracker for KvRepository<S> {
    fn stats(&self) -> UserStats {
        let stats: UserStats = self.load_or(STATS_KEY, UserStats::default);
        // A record claiming more correct answers than answers is corrupt.
        if stats.total_correct > stats.total_answered {
            UserStats::default()
        } else {
            stats
        }
    }

    fn record(&mut self, was_correct: bool, today: NaiveDate) -> Result<UserStats> {
        let updated = stats::apply_answer(&self.stats(), was_correct, today);
        self.save(STATS_KEY, &updated)?;
        Ok(updated)
    }
}

impl<S: KeyValue> SettingsStore for KvRepository<S> {
    fn settings(&self) -> AppSettings {
        self.load_or(SETTINGS_KEY, AppSettings::default)
    }

    fn set_settings(&mut self, settings: &AppSettings) -> Result<()> {
        self.save(SETTINGS_KEY, settings)
    }
}
