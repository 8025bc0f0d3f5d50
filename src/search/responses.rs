//! Response DTOs for the search API.

use serde::Serialize;

/// A unified, display-ready search result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub url: String,
    pub location: String,
    /// Currency-prefixed display string, e.g. "₹3500".
    pub price: String,
    pub rating: f64,
    pub verified: bool,
    pub is_platform_property: bool,
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Error envelope; still carries best-effort fallback results
#[derive(Debug, Serialize)]
pub struct SearchErrorResponse {
    pub error: String,
    pub message: String,
    pub results: Vec<SearchResult>,
}
