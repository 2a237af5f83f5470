//! Flashcard rotation and the not-remembered review queue.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use smartlex_core::{normalize_word, Card, FlashcardDeck, WordHistory};

use crate::error::{ApiError, Result};
use crate::services::lexicon::Lexicon;

/// Definition shown for a queued word whose definition is not known.
const UNKNOWN_DEFINITION: &str = "Definition not available";

/// The review deck plus the queue of words the user failed to recall.
///
/// A single lock covers the deck, the queue, and the extra definitions,
/// since a review touches the first two together and the extras only ever
/// change alongside the queue.
pub struct ReviewService {
    inner: Mutex<ReviewState>,
}

struct ReviewState {
    deck: FlashcardDeck,
    pending: WordHistory,
    /// Definitions for queued words that are not dictionary headwords,
    /// supplied by clients pushing sample-set words.
    extras: HashMap<String, String>,
}

impl ReviewService {
    pub fn new(deck: FlashcardDeck) -> Self {
        Self {
            inner: Mutex::new(ReviewState {
                deck,
                pending: WordHistory::new(),
                extras: HashMap::new(),
            }),
        }
    }

    /// The card currently due, without advancing.
    pub fn current(&self) -> Result<Option<Card>> {
        Ok(self.lock()?.deck.current().cloned())
    }

    /// Advance the rotation; returns the card that was due.
    pub fn advance(&self) -> Result<Option<Card>> {
        Ok(self.lock()?.deck.advance().cloned())
    }

    /// Apply a recall outcome to the current card and move on.
    ///
    /// Returns the reviewed card, or `None` when the deck is empty. A card
    /// that was not remembered lands in the pending queue.
    pub fn review(&self, remembered: bool) -> Result<Option<Card>> {
        let mut guard = self.lock()?;
        let reviewed = guard.deck.current().cloned();
        let state = &mut *guard;
        state.deck.review_current(remembered, &mut state.pending);
        Ok(reviewed)
    }

    /// Words awaiting another look, most recently missed first.
    pub fn pending_words(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.pending.newest_first())
    }

    /// Queue a word for review, with an optional definition for words the
    /// dictionary does not know.
    pub fn add_pending(&self, word: &str, extra_definition: Option<String>) -> Result<String> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(ApiError::BadRequest("word must not be blank".to_string()));
        }
        let mut state = self.lock()?;
        state.pending.push(&word);
        if let Some(definition) = extra_definition {
            state.extras.insert(word.clone(), definition);
        }
        Ok(word)
    }

    /// Drop a word from the queue; `true` if it was queued. Any stashed
    /// extra definition goes with it.
    pub fn remove_pending(&self, word: &str) -> Result<bool> {
        let word = normalize_word(word);
        let mut state = self.lock()?;
        let removed = state.pending.remove(&word);
        if removed {
            state.extras.remove(&word);
        }
        Ok(removed)
    }

    pub fn clear_pending(&self) -> Result<()> {
        let mut state = self.lock()?;
        state.pending.clear();
        state.extras.clear();
        Ok(())
    }

    /// The pending queue as cards, resolving each definition from the
    /// dictionary first, then the stashed extras, then a placeholder.
    pub fn pending_cards(&self, lexicon: &Lexicon) -> Result<Vec<Card>> {
        let state = self.lock()?;
        let cards = state
            .pending
            .newest_first()
            .into_iter()
            .map(|word| {
                let definition = lexicon
                    .definition(&word)
                    .or_else(|| state.extras.get(&word).map(String::as_str))
                    .unwrap_or(UNKNOWN_DEFINITION);
                Card::new(word.as_str(), definition)
            })
            .collect();
        Ok(cards)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ReviewState>> {
        self.inner
            .lock()
            .map_err(|_| ApiError::Internal("review lock poisoned".to_string()))
    }
}
