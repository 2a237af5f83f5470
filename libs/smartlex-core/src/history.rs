//! Bounded, duplicate-free recency stacks.
//!
//! The same structure backs two different logs: words the user looked up,
//! and flashcards the user failed to remember. Newest entries sit at the
//! front, revisiting a word moves it back to the front, and the oldest
//! entry falls off once the cap is reached.

use std::collections::VecDeque;

use crate::types::normalize_word;

/// Most entries a history will hold before evicting its oldest.
pub const HISTORY_CAP: usize = 100;

/// Recency-ordered word log with no duplicates and a fixed capacity.
#[derive(Debug, Default)]
pub struct WordHistory {
    /// Front is newest. Never holds two copies of a word.
    entries: VecDeque<String>,
}

impl WordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` as the most recent entry.
    ///
    /// The word is normalized first; a blank word is ignored. If the word is
    /// already present anywhere in the log, that copy is removed so the word
    /// appears exactly once, at the front. The oldest entry is evicted once
    /// the log exceeds [`HISTORY_CAP`].
    pub fn push(&mut self, word: &str) {
        let word = normalize_word(word);
        if word.is_empty() {
            return;
        }
        if let Some(pos) = self.entries.iter().position(|w| *w == word) {
            self.entries.remove(pos);
        }
        self.entries.push_front(word);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Remove `word` wherever it sits; `true` if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = normalize_word(word);
        match self.entries.iter().position(|w| *w == word) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Whether `word` is currently in the log.
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.entries.iter().any(|w| *w == word)
    }

    /// Entries ordered newest to oldest.
    pub fn newest_first(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
