//! Core review logic for the Kartu Bahasa vocabulary trainer.
//!
//! Provides:
//! - Weighted next-noun selection with an injectable random source
//! - Per-noun progress records and the daily-streak stats machine
//! - Level-selection settings with an all-levels default
//! - A string-keyed persistence contract with an in-memory implementation
//! - The UI-facing facade (`ReviewService`)

pub mod error;
pub mod mastery;
pub mod progress;
pub mod repository;
pub mod scheduler;
pub mod service;
pub mod settings;
pub mod stats;
pub mod store;
pub mod types;

pub use error::{CoreError, Result};
pub use mastery::{is_mastered, level_mastery, LevelMastery, MASTERY_STREAK};
pub use progress::ProgressStore;
pub use repository::KvRepository;
pub use scheduler::{select_next, selection_weight};
pub use service::{AnswerRecord, CatalogEntry, ReviewService};
pub use settings::SettingsStore;
pub use stats::StatsTracker;
pub use store::{KeyValue, MemoryStore};
pub use types::{
    AppSettings, Gender, Level, Noun, NounProgress, ProgressMap, UserStats,
};
