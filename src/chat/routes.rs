//! Chat route handlers

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::AppState;

use super::client::ChatMessage;

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for Homie, India's first \
    zero-commission homestay booking platform. Help users find perfect homestays, answer \
    questions about Indian travel, and provide recommendations about properties, locations, \
    and travel tips. Be friendly, knowledgeable about Indian culture and hospitality, and \
    always prioritize user safety and authentic experiences.";

const DEFAULT_USER_MESSAGE: &str = "Hello, I need help finding a homestay in India.";

const APOLOGY: &str =
    "I apologize, but I'm having trouble responding right now. Please try again.";

/// Chat request body; at least one of `messages` or `query` is required
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub query: Option<String>,
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

/// Forward a conversation to the completion collaborator.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    if req.messages.is_none() && req.query.is_none() {
        return Err(AppError::BadRequest(
            "Query or messages are required".to_string(),
        ));
    }

    let messages = req
        .messages
        .unwrap_or_else(|| default_conversation(req.query.as_deref()));

    debug!(turns = messages.len(), "forwarding chat conversation");

    let text = state
        .chat
        .complete(&messages)
        .await
        .map_err(|err| AppError::Upstream(err.to_string()))?;

    let response = if text.trim().is_empty() {
        APOLOGY.to_string()
    } else {
        text
    };

    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Conversation used when the caller sends a bare query.
fn default_conversation(query: Option<&str>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(query.unwrap_or(DEFAULT_USER_MESSAGE)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conversation_with_query() {
        let messages = default_conversation(Some("homestays in Manali"));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].content, "homestays in Manali");
    }

    #[test]
    fn test_default_conversation_without_query() {
        let messages = default_conversation(None);
        assert_eq!(messages[1].content, DEFAULT_USER_MESSAGE);
    }
}
