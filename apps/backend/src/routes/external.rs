//! Proxy endpoints for third-party dictionary data

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{ExternalDefinitionsResponse, WordQuery};
use crate::AppState;

/// GET /api/external/definitions
pub async fn definitions(
    State(state): State<AppState>,
    Query(query): Query<WordQuery>,
) -> Result<Json<ExternalDefinitionsResponse>> {
    if query.word.trim().is_empty() {
        return Err(ApiError::BadRequest("word is required".to_string()));
    }

    let data = state.definitions.lookup(&query.word).await?;
    Ok(Json(ExternalDefinitionsResponse {
        status: "ok".to_string(),
        data,
    }))
}
