//! API route handlers

pub mod external;
pub mod favorites;
pub mod flashcards;
pub mod history;
pub mod search;
pub mod translate;
