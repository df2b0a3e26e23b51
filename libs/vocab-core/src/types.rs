//! Core types for the vocabulary review scheduler.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Difficulty level of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
}

impl Level {
    /// Every level, in ascending difficulty order.
    pub const ALL: [Level; 3] = [Level::A1, Level::A2, Level::B1];

    /// The most fundamental level, used as the scheduler's fallback when the
    /// stored selection turns out empty or unusable.
    pub const BASE: Level = Level::A1;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
        }
    }
}

/// Grammatical article of a German noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Der,
    Die,
    Das,
}

impl Gender {
    pub fn article(self) -> &'static str {
        match self {
            Self::Der => "der",
            Self::Die => "die",
            Self::Das => "das",
        }
    }
}

/// One catalog entry. The catalog is ordered and immutable at runtime; only
/// `id` and `level` matter for scheduling, everything else is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Noun {
    pub id: String,
    pub word: String,
    pub gender: Gender,
    /// Indonesian meaning.
    pub meaning: String,
    pub level: Level,
    pub topic: String,
    /// Mnemonic shown after a wrong answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Per-noun mastery record. Created lazily on the first answer for a noun
/// and never deleted; a record may outlive its catalog entry harmlessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounProgress {
    pub noun_id: String,
    /// Consecutive correct answers; resets to 0 on any wrong answer.
    pub correct_streak: u32,
    pub total_attempts: u32,
    /// Epoch milliseconds of the most recent answer. Never decreases.
    pub last_seen_at: i64,
}

impl NounProgress {
    /// Zero record for a noun that is about to receive its first answer.
    pub fn new(noun_id: impl Into<String>) -> Self {
        Self {
            noun_id: noun_id.into(),
            correct_streak: 0,
            total_attempts: 0,
            last_seen_at: 0,
        }
    }
}

/// Aggregate counters and the daily streak. One record per installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_answered: u32,
    /// Invariant: never exceeds `total_answered`.
    pub total_correct: u32,
    /// Consecutive calendar days with at least one recorded answer.
    pub current_day_streak: u32,
    /// `YYYY-MM-DD`, or empty before the first answer.
    pub last_play_date: String,
}

impl UserStats {
    /// Overall accuracy as a whole percentage; 0 before any answer.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_answered == 0 {
            0
        } else {
            let ratio = f64::from(self.total_correct) / f64::from(self.total_answered);
            (ratio * 100.0).round() as u32
        }
    }
}

/// Which levels the user currently drills. The UI keeps the selection
/// non-empty; the scheduler additionally defends against an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub selected_levels: Vec<Level>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selected_levels: Level::ALL.to_vec(),
        }
    }
}

/// Persisted mapping from noun id to its progress record.
pub type ProgressMap = HashMap<String, NounProgress>;
