//! Search history endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::StatusResponse;
use crate::AppState;

/// GET /api/history
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.history.entries()?))
}

/// DELETE /api/history
pub async fn clear(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    state.history.clear()?;
    Ok(Json(StatusResponse {
        status: "ok".to_string(),
        message: "history cleared".to_string(),
    }))
}
