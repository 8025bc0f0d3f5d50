//! Runtime configuration loaded from the environment.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Web-search collaborator endpoint.
    pub search_api_url: String,
    pub search_api_key: Option<String>,
    /// Chat-completion collaborator endpoint (OpenAI-compatible).
    pub chat_api_url: String,
    pub chat_api_key: Option<String>,
    pub chat_model: String,
}

impl AppConfig {
    /// Read configuration from environment variables, with local-friendly
    /// defaults for everything but API keys.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            search_api_url: env::var("SEARCH_API_URL")
                .unwrap_or_else(|_| "https://api.tavily.com/search".to_string()),
            search_api_key: env::var("SEARCH_API_KEY").ok(),
            chat_api_url: env::var("CHAT_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            chat_api_key: env::var("CHAT_API_KEY").ok(),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }
}
