//! Homie web backend.
//!
//! Stateless JSON API for the Homie homestay marketplace: property search
//! with an external web-search pass, AI-assisted pricing suggestions, a
//! chat pass-through and the listing catalog. Both external collaborators
//! are injected behind traits; nothing here persists state beyond the
//! in-memory listing repository.

pub mod chat;
pub mod config;
pub mod error;
pub mod pricing;
pub mod properties;
pub mod search;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::client::{CompletionProvider, HttpCompletionClient};
use crate::config::AppConfig;
use crate::properties::repository::{InMemoryPropertyRepository, PropertyRepository};
use crate::search::client::{HttpSearchClient, SearchProvider};

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub properties: Arc<dyn PropertyRepository>,
    pub search: Arc<dyn SearchProvider>,
    pub chat: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Wire up the production collaborators from configuration.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            properties: Arc::new(InMemoryPropertyRepository::new()),
            search: Arc::new(HttpSearchClient::new(config)?),
            chat: Arc::new(HttpCompletionClient::new(config)?),
        })
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/search", post(search::routes::search))
        .route("/api/chat", post(chat::routes::chat))
        .route("/api/pricing/suggest", post(pricing::routes::suggest))
        .route(
            "/api/properties",
            get(properties::routes::list).post(properties::routes::create),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
