//! Stats endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StatsResponse;
use crate::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let service = state.service.lock().expect("service lock");

    let stats = service.stats();
    let levels = service.level_mastery();
    let accuracy_percent = stats.accuracy_percent();

    Ok(Json(StatsResponse {
        stats,
        accuracy_percent,
        levels,
    }))
}
