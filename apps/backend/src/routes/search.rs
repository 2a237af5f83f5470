//! Search and autocomplete endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use smartlex_core::normalize_word;

use crate::error::Result;
use crate::models::{SearchQuery, SearchResponse, SuggestQuery};
use crate::AppState;

/// GET /api/search
///
/// Exact lookup first; a hit is recorded in the search history, a miss gets
/// a "did you mean" correction when one is close enough. A blank query is
/// an ordinary miss with no correction.
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    let word = normalize_word(&query.word);
    if word.is_empty() {
        return Ok(Json(SearchResponse::miss(None)));
    }

    match state.lexicon.definition(&word) {
        Some(definition) => {
            state.history.record(&word)?;
            Ok(Json(SearchResponse::hit(word, definition.to_string())))
        }
        None => Ok(Json(SearchResponse::miss(state.lexicon.correct(&word)))),
    }
}

/// GET /api/suggest
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Json<Vec<String>> {
    Json(state.lexicon.completions(&query.q))
}
