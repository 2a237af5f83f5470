//! Services backing the API routes

pub mod definitions;
pub mod favorites;
pub mod history;
pub mod lexicon;
pub mod review;
pub mod translate;
