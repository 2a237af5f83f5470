//! Parsing of the word → definition source file.
//!
//! The dictionary ships as a flat JSON object: `{"apple": "a fruit", ...}`.
//! Parsing normalizes every headword so the rest of the engine can assume
//! lower-cased, trimmed keys.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::normalize_word;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse dictionary file content into a normalized word → definition map.
///
/// Headwords are normalized; entries whose headword normalizes to the empty
/// string are dropped. When two headwords collapse to the same normalized
/// form, one of them wins — which one is unspecified. Blank content is
/// treated as an empty dictionary rather than a parse error, so a freshly
/// created data file works.
pub fn parse(content: &str) -> Result<HashMap<String, String>, DictionaryError> {
    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let raw: HashMap<String, String> = serde_json::from_str(content)?;
    let mut entries = HashMap::with_capacity(raw.len());
    for (word, definition) in raw {
        let word = normalize_word(&word);
        if word.is_empty() {
            continue;
        }
        entries.insert(word, definition);
    }
    Ok(entries)
}
