//! Request DTOs for the search API.

use serde::Deserialize;

/// Search request body. `query` is required but may be empty; an empty
/// query matches the whole platform catalog.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}
