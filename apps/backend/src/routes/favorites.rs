//! Favorite words endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use smartlex_core::normalize_word;

use crate::error::{ApiError, Result};
use crate::models::{DefinitionBody, FavoriteAck, FavoriteEntry, FavoriteStatus};
use crate::AppState;

/// Definition stored when neither the dictionary nor the client has one.
const NO_DEFINITION: &str = "No definition available";

/// GET /api/favorites
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FavoriteEntry>>> {
    Ok(Json(state.favorites.list()?))
}

/// GET /api/favorites/{word}
///
/// Always answers 200; `found` tells whether the word is favorited, so
/// clients can render a toggle without treating "not saved" as an error.
pub async fn get_one(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<FavoriteStatus>> {
    let status = match state.favorites.get(&word)? {
        Some(entry) => FavoriteStatus {
            found: true,
            word: Some(entry.word),
            definition: Some(entry.definition),
        },
        None => FavoriteStatus {
            found: false,
            word: None,
            definition: None,
        },
    };
    Ok(Json(status))
}

/// POST /api/favorites/{word}
///
/// The saved definition comes from the dictionary when the word is known,
/// otherwise from the request body (sample sets), otherwise a placeholder.
pub async fn add(
    State(state): State<AppState>,
    Path(word): Path<String>,
    body: Option<Json<DefinitionBody>>,
) -> Result<Json<FavoriteAck>> {
    let definition = state
        .lexicon
        .definition(&word)
        .map(str::to_string)
        .or_else(|| body.and_then(|Json(b)| b.definition))
        .unwrap_or_else(|| NO_DEFINITION.to_string());

    let entry = state.favorites.add(&word, definition)?;

    Ok(Json(FavoriteAck {
        status: "ok".to_string(),
        favorite: true,
        word: entry.word,
    }))
}

/// DELETE /api/favorites/{word}
pub async fn remove(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<FavoriteAck>> {
    let word = normalize_word(&word);
    if !state.favorites.remove(&word)? {
        return Err(ApiError::NotFound(format!(
            "word '{}' is not favorited",
            word
        )));
    }

    Ok(Json(FavoriteAck {
        status: "ok".to_string(),
        favorite: false,
        word,
    }))
}
