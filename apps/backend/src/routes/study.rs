//! Study endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::{AnswerRequest, AnswerResponse, NextQuery};
use crate::AppState;
use vocab_core::Noun;

/// GET /api/study/next
pub async fn next(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
) -> Result<Json<Noun>> {
    let mut service = state.service.lock().expect("service lock");

    let noun = service
        .next_noun(query.last_shown.as_deref(), Utc::now())?
        .clone();

    Ok(Json(noun))
}

/// POST /api/study/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>> {
    let mut service = state.service.lock().expect("service lock");

    let noun = service
        .find_noun(&payload.noun_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("noun {}", payload.noun_id)))?;

    let was_correct = payload.gender == noun.gender;
    let record = service.submit_answer(&noun.id, was_correct, Utc::now())?;

    Ok(Json(AnswerResponse {
        was_correct,
        correct_gender: noun.gender,
        word: noun.word,
        tip: noun.tip,
        progress: record.progress,
        stats: record.stats,
    }))
}
