//! Search route handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::AppState;

use super::client::fallback_snippets;
use super::composer;
use super::requests::SearchRequest;
use super::responses::{SearchErrorResponse, SearchResponse, SearchResult};

/// How many external results the collaborator is asked for.
const EXTERNAL_RESULT_LIMIT: usize = 5;

/// Unified property search: platform catalog matches followed by external
/// web-search results.
///
/// A collaborator failure is recovered with the canned fallback snippets
/// and still answers 200. Only an internal fault answers 500, and even
/// that envelope carries fallback-derived results.
pub async fn search(State(state): State<AppState>, Json(req): Json<SearchRequest>) -> Response {
    let Some(query) = req.query else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Query is required" })),
        )
            .into_response();
    };

    info!(%query, "search query received");

    match run_search(&state, &query).await {
        Ok(results) => Json(SearchResponse { results }).into_response(),
        Err(err) => {
            error!("search failed: {err:#}");
            // Best-effort results so the caller still has something to show.
            let mut rng = rand::thread_rng();
            let results: Vec<SearchResult> = fallback_snippets()
                .iter()
                .map(|snippet| composer::external_result(snippet, &mut rng))
                .collect();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchErrorResponse {
                    error: "Internal server error".to_string(),
                    message: err.to_string(),
                    results,
                }),
            )
                .into_response()
        }
    }
}

async fn run_search(state: &AppState, query: &str) -> anyhow::Result<Vec<SearchResult>> {
    let listings = state.properties.list()?;

    let external_query = format!("homestay properties in India {query}");
    let snippets = match state
        .search
        .search(&external_query, EXTERNAL_RESULT_LIMIT)
        .await
    {
        Ok(snippets) => snippets,
        Err(err) => {
            warn!("external search failed, using fallback: {err:#}");
            fallback_snippets()
        }
    };

    let mut rng = rand::thread_rng();
    Ok(composer::compose(&listings, query, &snippets, &mut rng))
}
