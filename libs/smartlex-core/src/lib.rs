//! Core word-intelligence engine shared by the smartlex backend.
//!
//! Provides:
//! - Prefix index (trie) for bounded autocomplete
//! - Levenshtein distance and "did you mean" correction
//! - Circular flashcard deck with recall bookkeeping
//! - Bounded, deduplicating word history
//! - Dictionary source parsing (JSON word -> definition map)
//!
//! Everything here is pure in-memory computation: no I/O, no async, no
//! failure modes beyond malformed dictionary input. Misses are ordinary
//! return values (`None`, empty vec), never errors.

pub mod corrector;
pub mod deck;
pub mod dictionary;
pub mod history;
pub mod trie;
pub mod types;

pub use corrector::{levenshtein, nearest, MAX_EDIT_DISTANCE};
pub use deck::FlashcardDeck;
pub use dictionary::{parse, DictionaryError};
pub use history::{WordHistory, HISTORY_CAP};
pub use trie::{PrefixIndex, MAX_COMPLETIONS};
pub use types::{normalize_word, Card};
