//! Translation endpoints
//!
//! The same handler logic serves both verbs: GET takes query parameters,
//! POST takes a JSON body, both shaped as [`TranslateRequest`].

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{TranslateRequest, TranslateResponse};
use crate::AppState;

/// GET /api/translate
pub async fn query(
    State(state): State<AppState>,
    Query(request): Query<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    respond(&state, request).await
}

/// POST /api/translate
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    respond(&state, request).await
}

async fn respond(state: &AppState, request: TranslateRequest) -> Result<Json<TranslateResponse>> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text is required".to_string()));
    }

    let translated = state
        .translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await?;

    Ok(Json(TranslateResponse {
        status: "ok".to_string(),
        original_text: request.text,
        translated_text: translated,
        source_lang: request.source_lang,
        target_lang: request.target_lang,
    }))
}
