//! Search history shared across requests.

use std::sync::{Mutex, MutexGuard};

use smartlex_core::WordHistory;

use crate::error::{ApiError, Result};

/// Bounded log of successfully looked-up words, behind a lock so handlers
/// can record and read concurrently.
pub struct HistoryService {
    log: Mutex<WordHistory>,
}

impl HistoryService {
    pub fn new() -> Self {
        Self {
            log: Mutex::new(WordHistory::new()),
        }
    }

    /// Record a successful lookup.
    pub fn record(&self, word: &str) -> Result<()> {
        self.lock()?.push(word);
        Ok(())
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Result<Vec<String>> {
        Ok(self.lock()?.newest_first())
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, WordHistory>> {
        self.log
            .lock()
            .map_err(|_| ApiError::Internal("history lock poisoned".to_string()))
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
