//! Catalog listing endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::catalog;
use crate::error::Result;
use crate::models::{WordEntry, WordListResponse, WordsQuery};
use crate::AppState;

/// GET /api/words
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<WordListResponse>> {
    let service = state.service.lock().expect("service lock");

    let entries = service.catalog_progress();
    let total = entries.len();

    let needle = query.search.unwrap_or_default().trim().to_lowercase();
    let words: Vec<WordEntry> = entries
        .into_iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.noun.word.to_lowercase().contains(&needle)
                || entry.noun.meaning.to_lowercase().contains(&needle)
        })
        .map(|entry| WordEntry {
            visual: catalog::visual_for(&entry.noun).to_string(),
            noun: entry.noun,
            progress: entry.progress,
        })
        .collect();

    Ok(Json(WordListResponse {
        total,
        matched: words.len(),
        words,
    }))
}
