//! API request and response bodies.

use serde::{Deserialize, Serialize};
use vocab_core::{Gender, Level, LevelMastery, Noun, NounProgress, UserStats};

#[derive(Debug, Deserialize)]
pub struct NextQuery {
    /// Id of the noun shown last, excluded from the draw where possible.
    pub last_shown: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub noun_id: String,
    /// The article the user picked.
    pub gender: Gender,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub was_correct: bool,
    pub correct_gender: Gender,
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    pub progress: NounProgress,
    pub stats: UserStats,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub selected_levels: Vec<Level>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: UserStats,
    pub accuracy_percent: u32,
    pub levels: Vec<LevelMastery>,
}

#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    /// Case-insensitive substring over word and meaning.
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WordEntry {
    pub noun: Noun,
    /// Emoji shown next to the word.
    pub visual: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<NounProgress>,
}

#[derive(Debug, Serialize)]
pub struct WordListResponse {
    pub total: usize,
    pub matched: usize,
    pub words: Vec<WordEntry>,
}
