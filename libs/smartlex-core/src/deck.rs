//! Circular flashcard deck with a movable cursor.
//!
//! Cards sit in an ordered sequence whose last element wraps around to the
//! first, so review can loop forever. The cursor is a plain index advanced
//! modulo the deck length — no linked nodes, no ownership cycles.

use crate::history::WordHistory;
use crate::types::Card;

/// Ordered, logically circular sequence of cards under review.
#[derive(Debug, Default)]
pub struct FlashcardDeck {
    cards: Vec<Card>,
    /// Index of the card due next. Only meaningful while `cards` is
    /// non-empty; always `< cards.len()` then.
    cursor: usize,
}

impl FlashcardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card at the logical end of the rotation, i.e. just before
    /// the first card comes around again. The cursor does not move; a card
    /// added to an empty deck becomes the current card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The card the cursor points at, without moving it.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Return the current card and step the cursor to its successor.
    ///
    /// On a one-card deck the successor is the card itself, so repeated
    /// calls keep returning it. An empty deck yields `None` and moves
    /// nothing.
    pub fn advance(&mut self) -> Option<&Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.cards.len();
        self.cards.get(index)
    }

    /// Record a review outcome for the current card and move on.
    ///
    /// A card that was not remembered has its word pushed into `sink` so it
    /// can be revisited later; the card itself stays in rotation either way.
    /// On an empty deck this is a no-op.
    pub fn review_current(&mut self, remembered: bool, sink: &mut WordHistory) {
        if self.cards.is_empty() {
            return;
        }
        if !remembered {
            sink.push(&self.cards[self.cursor].word);
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
