//! Favorite words store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use smartlex_core::normalize_word;

use crate::error::{ApiError, Result};
use crate::models::FavoriteEntry;

/// Key-unique favorites list, kept in the order words were first saved.
///
/// Reads vastly outnumber writes here, hence the read-write lock.
pub struct FavoriteService {
    entries: RwLock<Vec<FavoriteEntry>>,
}

impl FavoriteService {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Save a word under the given definition. Re-saving an already
    /// favorited word replaces its definition in place.
    pub fn add(&self, word: &str, definition: String) -> Result<FavoriteEntry> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(ApiError::BadRequest("word must not be blank".to_string()));
        }

        let entry = FavoriteEntry {
            word: word.clone(),
            definition,
            added_at: Utc::now(),
        };

        let mut entries = self.write()?;
        match entries.iter_mut().find(|e| e.word == word) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }
        Ok(entry)
    }

    pub fn get(&self, word: &str) -> Result<Option<FavoriteEntry>> {
        let word = normalize_word(word);
        Ok(self.read()?.iter().find(|e| e.word == word).cloned())
    }

    /// Remove a favorite; `true` if it existed.
    pub fn remove(&self, word: &str) -> Result<bool> {
        let word = normalize_word(word);
        let mut entries = self.write()?;
        match entries.iter().position(|e| e.word == word) {
            Some(pos) => {
                entries.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// All favorites in first-saved order.
    pub fn list(&self) -> Result<Vec<FavoriteEntry>> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<FavoriteEntry>>> {
        self.entries
            .read()
            .map_err(|_| ApiError::Internal("favorites lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<FavoriteEntry>>> {
        self.entries
            .write()
            .map_err(|_| ApiError::Internal("favorites lock poisoned".to_string()))
    }
}

impl Default for FavoriteService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn saved_words_are_listed_in_first_saved_order() {
        let service = FavoriteService::new();
        service.add("banana", "another fruit".to_string()).unwrap();
        service.add("apple", "a fruit".to_string()).unwrap();

        let words: Vec<String> = service.list().unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["banana", "apple"]);
    }

    #[test]
    fn resaving_replaces_the_definition_without_duplicating() {
        let service = FavoriteService::new();
        service.add("apple", "a fruit".to_string()).unwrap();
        service.add("Apple", "a pome fruit".to_string()).unwrap();

        let entries = service.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].definition, "a pome fruit");
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let service = FavoriteService::new();
        service.add("apple", "a fruit".to_string()).unwrap();
        assert!(service.get("APPLE").unwrap().is_some());
        assert!(service.get("pear").unwrap().is_none());
    }

    #[test]
    fn remove_reports_whether_the_word_was_saved() {
        let service = FavoriteService::new();
        service.add("apple", "a fruit".to_string()).unwrap();
        assert!(service.remove("apple").unwrap());
        assert!(!service.remove("apple").unwrap());
    }

    #[test]
    fn blank_words_are_rejected() {
        let service = FavoriteService::new();
        assert!(service.add("  ", "definition".to_string()).is_err());
    }
}
