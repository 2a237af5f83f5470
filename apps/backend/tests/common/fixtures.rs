//! Test fixtures and factory functions for creating test data.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Standard fixture dictionary.
///
/// Hand-picked for coverage: four "ap" words exercise prefix grouping, six
/// "ca" words overflow the five-suggestion cap, and "zebra" sits alone at
/// the end of the sort order.
pub fn dictionary() -> HashMap<String, String> {
    [
        ("apple", "a fruit"),
        ("application", "a formal request"),
        ("apply", "to make a request"),
        ("apricot", "a stone fruit"),
        ("banana", "another fruit"),
        ("candid", "frank and truthful"),
        ("cantaloupe", "a melon"),
        ("carrot", "a root vegetable"),
        ("cat", "a small mammal"),
        ("catalyst", "an agent of change"),
        ("cavern", "a large cave"),
        ("dog", "a loyal mammal"),
        ("zebra", "a striped horse"),
    ]
    .into_iter()
    .map(|(word, definition)| (word.to_string(), definition.to_string()))
    .collect()
}

/// A two-word dictionary for deterministic rotation tests.
pub fn two_word_dictionary() -> HashMap<String, String> {
    [("apple", "a fruit"), ("banana", "another fruit")]
        .into_iter()
        .map(|(word, definition)| (word.to_string(), definition.to_string()))
        .collect()
}

/// Body for `POST /api/flashcards/review`.
pub fn review_request(remembered: bool) -> Value {
    json!({ "remembered": remembered })
}

/// Body carrying a client-supplied definition.
pub fn definition_body(definition: &str) -> Value {
    json!({ "definition": definition })
}

/// Body for `POST /api/translate`.
pub fn translate_request(text: &str) -> Value {
    json!({ "text": text })
}
