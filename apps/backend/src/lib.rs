pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::definitions::DefinitionService;
use crate::services::favorites::FavoriteService;
use crate::services::history::HistoryService;
use crate::services::lexicon::Lexicon;
use crate::services::review::ReviewService;
use crate::services::translate::TranslateService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
    pub history: Arc<HistoryService>,
    pub review: Arc<ReviewService>,
    pub favorites: Arc<FavoriteService>,
    pub translator: Arc<TranslateService>,
    pub definitions: Arc<DefinitionService>,
}

impl AppState {
    /// Build the full request state from a loaded lexicon. The flashcard
    /// deck is seeded with every dictionary entry.
    pub fn new(lexicon: Lexicon) -> anyhow::Result<Self> {
        let deck = lexicon.deck();
        Ok(Self {
            lexicon: Arc::new(lexicon),
            history: Arc::new(HistoryService::new()),
            review: Arc::new(ReviewService::new(deck)),
            favorites: Arc::new(FavoriteService::new()),
            translator: Arc::new(TranslateService::new()?),
            definitions: Arc::new(DefinitionService::new()?),
        })
    }
}

/// Build the API router over the given state. Shared with the integration
/// tests so they exercise the same routing table the server runs.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Search routes
        .route("/api/search", get(routes::search::lookup))
        .route("/api/suggest", get(routes::search::suggest))
        // History routes
        .route("/api/history", get(routes::history::list))
        .route("/api/history", delete(routes::history::clear))
        // Flashcard routes
        .route("/api/flashcards/current", get(routes::flashcards::current))
        .route("/api/flashcards/next", post(routes::flashcards::next))
        .route("/api/flashcards/review", post(routes::flashcards::review))
        .route("/api/flashcards/pending", get(routes::flashcards::pending))
        .route(
            "/api/flashcards/pending",
            delete(routes::flashcards::clear_pending),
        )
        .route(
            "/api/flashcards/pending/cards",
            get(routes::flashcards::pending_cards),
        )
        .route(
            "/api/flashcards/pending/{word}",
            post(routes::flashcards::add_pending),
        )
        .route(
            "/api/flashcards/pending/{word}",
            delete(routes::flashcards::remove_pending),
        )
        .route(
            "/api/flashcards/favorites",
            get(routes::flashcards::favorites),
        )
        // Favorites routes
        .route("/api/favorites", get(routes::favorites::list))
        .route("/api/favorites/{word}", get(routes::favorites::get_one))
        .route("/api/favorites/{word}", post(routes::favorites::add))
        .route("/api/favorites/{word}", delete(routes::favorites::remove))
        // Translation routes
        .route("/api/translate", get(routes::translate::query))
        .route("/api/translate", post(routes::translate::submit))
        // External dictionary proxy
        .route(
            "/api/external/definitions",
            get(routes::external::definitions),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dictionary_path =
        std::env::var("DICTIONARY_PATH").unwrap_or_else(|_| "data/dictionary.json".to_string());

    tracing::info!("Loading dictionary from {}...", dictionary_path);
    let lexicon = Lexicon::load(Path::new(&dictionary_path))?;
    tracing::info!("Dictionary loaded: {} words", lexicon.len());

    let state = AppState::new(lexicon)?;
    let app = app(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
