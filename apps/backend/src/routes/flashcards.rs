//! Flashcard review endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use smartlex_core::normalize_word;

use crate::error::{ApiError, Result};
use crate::models::{Card, DefinitionBody, ReviewRequest, ReviewResponse, StatusResponse, WordAck};
use crate::AppState;

/// GET /api/flashcards/current
pub async fn current(State(state): State<AppState>) -> Result<Json<Card>> {
    let card = state
        .review
        .current()?
        .ok_or_else(|| ApiError::NotFound("no flashcards loaded".to_string()))?;
    Ok(Json(card))
}

/// POST /api/flashcards/next
pub async fn next(State(state): State<AppState>) -> Result<Json<Card>> {
    let card = state
        .review
        .advance()?
        .ok_or_else(|| ApiError::NotFound("no flashcards loaded".to_string()))?;
    Ok(Json(card))
}

/// POST /api/flashcards/review
pub async fn review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>> {
    let reviewed = state
        .review
        .review(payload.remembered)?
        .ok_or_else(|| ApiError::NotFound("no flashcards loaded".to_string()))?;

    Ok(Json(ReviewResponse {
        status: "ok".to_string(),
        remembered: payload.remembered,
        word: reviewed.word,
    }))
}

/// GET /api/flashcards/pending
pub async fn pending(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.review.pending_words()?))
}

/// GET /api/flashcards/pending/cards
pub async fn pending_cards(State(state): State<AppState>) -> Result<Json<Vec<Card>>> {
    Ok(Json(state.review.pending_cards(&state.lexicon)?))
}

/// POST /api/flashcards/pending/{word}
///
/// Queues any word for review, dictionary or not; sample-set clients may
/// send a definition for words the dictionary does not know.
pub async fn add_pending(
    State(state): State<AppState>,
    Path(word): Path<String>,
    body: Option<Json<DefinitionBody>>,
) -> Result<Json<WordAck>> {
    let extra = body
        .and_then(|Json(b)| b.definition)
        .filter(|_| !state.lexicon.contains(&word));
    let word = state.review.add_pending(&word, extra)?;

    Ok(Json(WordAck {
        status: "ok".to_string(),
        message: "word queued for review".to_string(),
        word,
    }))
}

/// DELETE /api/flashcards/pending/{word}
pub async fn remove_pending(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<WordAck>> {
    let word = normalize_word(&word);
    if !state.review.remove_pending(&word)? {
        return Err(ApiError::NotFound(format!(
            "word '{}' is not in the review queue",
            word
        )));
    }

    Ok(Json(WordAck {
        status: "ok".to_string(),
        message: "word marked as remembered".to_string(),
        word,
    }))
}

/// DELETE /api/flashcards/pending
pub async fn clear_pending(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    state.review.clear_pending()?;
    Ok(Json(StatusResponse {
        status: "ok".to_string(),
        message: "review queue cleared".to_string(),
    }))
}

/// GET /api/flashcards/favorites
///
/// The favorites list presented as a card set for reviewing.
pub async fn favorites(State(state): State<AppState>) -> Result<Json<Vec<Card>>> {
    let cards = state
        .favorites
        .list()?
        .into_iter()
        .map(|entry| Card::new(entry.word, entry.definition))
        .collect();
    Ok(Json(cards))
}
