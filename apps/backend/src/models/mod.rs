//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export the shared card type from smartlex-core
pub use smartlex_core::Card;

// === Query Types ===

/// Query string for `GET /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub word: String,
}

/// Query string for `GET /api/suggest`
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub q: String,
}

/// Query string for `GET /api/external/definitions`
#[derive(Debug, Deserialize)]
pub struct WordQuery {
    pub word: String,
}

// === Search ===

/// Response for a dictionary lookup.
///
/// A hit carries the word and its definition; a miss carries an optional
/// "did you mean" correction instead.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
}

impl SearchResponse {
    pub fn hit(word: String, definition: String) -> Self {
        Self {
            found: true,
            word: Some(word),
            definition: Some(definition),
            correction: None,
        }
    }

    pub fn miss(correction: Option<String>) -> Self {
        Self {
            found: false,
            word: None,
            definition: None,
            correction,
        }
    }
}

// === Flashcards ===

/// Body for `POST /api/flashcards/review`
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub remembered: bool,
}

/// Response after reviewing the current card
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub status: String,
    pub remembered: bool,
    pub word: String,
}

/// Optional body carrying a definition for words outside the dictionary
/// (sample sets), accepted by pending-review and favorite additions.
#[derive(Debug, Default, Deserialize)]
pub struct DefinitionBody {
    pub definition: Option<String>,
}

/// Acknowledgement for operations addressed to a single word
#[derive(Debug, Serialize)]
pub struct WordAck {
    pub status: String,
    pub message: String,
    pub word: String,
}

/// Acknowledgement for operations without a word argument
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

// === Favorites ===

/// A favorited word with the definition it was saved under
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteEntry {
    pub word: String,
    pub definition: String,
    pub added_at: DateTime<Utc>,
}

/// Response for `GET /api/favorites/{word}`
#[derive(Debug, Serialize)]
pub struct FavoriteStatus {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

/// Acknowledgement for favorite add/remove
#[derive(Debug, Serialize)]
pub struct FavoriteAck {
    pub status: String,
    pub favorite: bool,
    pub word: String,
}

// === Translation ===

/// Body for `POST /api/translate`, doubling as the query string for the GET
/// form. Field names follow the client contract, hence camelCase.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "es".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub status: String,
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

// === External Dictionary ===

/// Proxied response from the external dictionary API; `data` is passed
/// through as received.
#[derive(Debug, Serialize)]
pub struct ExternalDefinitionsResponse {
    pub status: String,
    pub data: serde_json::Value,
}
