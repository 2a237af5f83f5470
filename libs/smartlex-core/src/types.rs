//! Core types for the word-intelligence engine.

use serde::{Deserialize, Serialize};

/// A flashcard: a word and its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub word: String,
    pub definition: String,
}

impl Card {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// Normalize a word to its canonical key form: trimmed and lower-cased.
///
/// Every structure in this crate normalizes input through this function
/// before insert/lookup, so comparisons are case-insensitive by
/// construction rather than by repeated conversion at call sites.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_word("  Apple "), "apple");
        assert_eq!(normalize_word("BANANA"), "banana");
        assert_eq!(normalize_word("ice cream"), "ice cream");
    }

    #[test]
    fn normalize_blank_is_empty() {
        assert_eq!(normalize_word(""), "");
        assert_eq!(normalize_word("   "), "");
    }
}
