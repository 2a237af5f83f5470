//! The loaded dictionary: word map, prefix index, and correction candidates.
//!
//! Built once at startup and never mutated afterwards, so it can be shared
//! across request handlers without locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use smartlex_core::dictionary::{self, DictionaryError};
use smartlex_core::{nearest, normalize_word, Card, FlashcardDeck, PrefixIndex};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] DictionaryError),
}

/// Read-only view over the word → definition mapping, with the prefix index
/// and the sorted headword list derived from it.
pub struct Lexicon {
    entries: HashMap<String, String>,
    /// Headwords in sorted order. Gives the corrector a stable candidate
    /// order, so tie-breaks come out the same on every run.
    words: Vec<String>,
    index: PrefixIndex,
}

impl Lexicon {
    pub fn new(entries: HashMap<String, String>) -> Self {
        let mut words: Vec<String> = entries.keys().cloned().collect();
        words.sort();

        let mut index = PrefixIndex::new();
        for word in &words {
            index.insert(word);
        }

        Self {
            entries,
            words,
            index,
        }
    }

    /// Load and parse the dictionary file at `path`.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(dictionary::parse(&content)?))
    }

    /// Definition for an exact headword match.
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.entries.get(&normalize_word(word)).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&normalize_word(word))
    }

    /// Autocomplete suggestions for `prefix`, capped by the index.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.index.completions(prefix)
    }

    /// Closest headword to a misspelt `word`, if any is near enough.
    pub fn correct(&self, word: &str) -> Option<String> {
        nearest(word, self.words.iter().map(String::as_str)).map(str::to_string)
    }

    /// A flashcard deck over every entry, cards in headword order.
    pub fn deck(&self) -> FlashcardDeck {
        let mut deck = FlashcardDeck::new();
        for word in &self.words {
            if let Some(definition) = self.entries.get(word) {
                deck.add_card(Card::new(word.as_str(), definition.as_str()));
            }
        }
        deck
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Lexicon {
        Lexicon::new(HashMap::from([
            ("apple".to_string(), "a fruit".to_string()),
            ("applet".to_string(), "a small program".to_string()),
            ("banana".to_string(), "another fruit".to_string()),
        ]))
    }

    #[test]
    fn lookup_normalizes_the_query() {
        let lexicon = sample();
        assert_eq!(lexicon.definition("  APPLE "), Some("a fruit"));
        assert!(lexicon.contains("Banana"));
        assert!(!lexicon.contains("carrot"));
    }

    #[test]
    fn completions_come_from_the_index() {
        let lexicon = sample();
        assert_eq!(lexicon.completions("app"), vec!["apple", "applet"]);
        assert!(lexicon.completions("zzz").is_empty());
    }

    #[test]
    fn corrections_scan_headwords_in_sorted_order() {
        let lexicon = sample();
        assert_eq!(lexicon.correct("appl"), Some("apple".to_string()));
        assert_eq!(lexicon.correct("qqqq"), None);
    }

    #[test]
    fn deck_is_seeded_in_headword_order() {
        let lexicon = sample();
        let mut deck = lexicon.deck();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.advance().map(|c| c.word.clone()), Some("apple".to_string()));
        assert_eq!(deck.advance().map(|c| c.word.clone()), Some("applet".to_string()));
        assert_eq!(deck.advance().map(|c| c.word.clone()), Some("banana".to_string()));
    }
}
