//! External web-search collaborator.
//!
//! The search pass calls out to a hosted web-search API once per request.
//! The trait keeps the collaborator injectable; `fallback_snippets` is the
//! canned substitute used whenever the call fails.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

/// Raw result from the external search collaborator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalSnippet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub host_name: Option<String>,
}

impl ExternalSnippet {
    /// Combined name plus snippet text the extraction heuristics scan.
    pub fn text(&self) -> String {
        let body = self
            .snippet
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default();
        match self.name.as_deref() {
            Some(name) => format!("{name} {body}"),
            None => body.to_string(),
        }
    }
}

/// One-shot web search against an external collaborator.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<ExternalSnippet>>;
}

/// Search request body
#[derive(Debug, Serialize)]
struct SearchApiRequest<'a> {
    query: &'a str,
    num: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Search response body
#[derive(Debug, Deserialize)]
struct SearchApiResponse {
    #[serde(default)]
    results: Vec<ExternalSnippet>,
}

/// HTTP client for the hosted web-search API.
pub struct HttpSearchClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpSearchClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.search_api_url.clone(),
            api_key: config.search_api_key.clone(),
        })
    }
}

#[async_trait]
impl SearchProvider for HttpSearchClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<ExternalSnippet>> {
        let request = SearchApiRequest {
            query,
            num: max_results,
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send web search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Web search API error {}: {}", status, body);
        }

        let parsed: SearchApiResponse = response
            .json()
            .await
            .context("Failed to parse web search response")?;

        Ok(parsed.results)
    }
}

/// Canned snippets substituted when the collaborator fails. Content is
/// fixed so the fallback path is exactly testable.
pub fn fallback_snippets() -> Vec<ExternalSnippet> {
    let entries = [
        (
            "Coconut Grove Homestay",
            "Beautiful beachside property in Goa with traditional architecture and modern \
             amenities. Perfect for families and couples.",
            "Rajesh Patel",
        ),
        (
            "Heritage Haveli",
            "Authentic Rajasthani heritage property with traditional decor and modern comforts. \
             Located in the heart of Jaipur.",
            "Priya Singh",
        ),
        (
            "Backwater Bliss",
            "Traditional Kerala houseboat experience with authentic cuisine and serene backwater \
             views. Alleppey, Kerala.",
            "Suresh Kumar",
        ),
        (
            "Mountain View Cottage",
            "Cozy hillside cottage in Manali with stunning mountain views and fireplace. Perfect \
             for winter getaways.",
            "Anita Sharma",
        ),
        (
            "City Center Apartment",
            "Modern apartment in Bangalore's tech hub with high-speed WiFi and close to major \
             attractions.",
            "Vikram Mehta",
        ),
    ];

    entries
        .iter()
        .map(|(name, snippet, host)| ExternalSnippet {
            name: Some(name.to_string()),
            snippet: Some(snippet.to_string()),
            description: None,
            url: Some("#".to_string()),
            host_name: Some(host.to_string()),
        })
        .collect()
}
