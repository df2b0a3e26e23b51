//! Settings endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::UpdateSettingsRequest;
use crate::AppState;
use vocab_core::AppSettings;

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> Result<Json<AppSettings>> {
    let service = state.service.lock().expect("service lock");
    Ok(Json(service.settings()))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<AppSettings>> {
    let mut service = state.service.lock().expect("service lock");

    let saved = service.update_settings(AppSettings {
        selected_levels: payload.selected_levels,
    })?;

    Ok(Json(saved))
}
