//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext that wires the full application state over a
//! small fixture dictionary, so tests exercise the same router the server
//! runs without touching the filesystem or the network. Only tests marked
//! `requires network` call out to the real third-party APIs.

pub mod fixtures;

use std::collections::HashMap;

use axum::Router;

use smartlex_backend::services::lexicon::Lexicon;
use smartlex_backend::{app, AppState};

/// Test context holding a fully wired application router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context over the standard fixture dictionary.
    pub fn new() -> Self {
        Self::with_entries(fixtures::dictionary())
    }

    /// Create a context over a caller-supplied word → definition map.
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        let state = AppState::new(Lexicon::new(entries)).expect("failed to build app state");
        Self { app: app(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
