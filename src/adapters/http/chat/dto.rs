//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::chat::{
    AnalyzeConversationResult, ConversationView, SendMessageResult,
};
use crate::domain::chat::Role;
use crate::domain::sentiment::Sentiment;
use crate::ports::StoredMessage;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to send a chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub conversation_id: String,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for conversation creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewConversationResponse {
    pub conversation_id: String,
}

/// Response for a chat exchange: the reply plus the analyzed sentiment
/// of the user's message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub explanation: String,
}

impl From<SendMessageResult> for ChatResponse {
    fn from(result: SendMessageResult) -> Self {
        Self {
            response: result.reply,
            sentiment: result.sentiment.sentiment,
            sentiment_score: result.sentiment.score.value(),
            explanation: result.sentiment.detail,
        }
    }
}

/// A single message in a conversation history response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
    pub created_at: String,
}

impl From<StoredMessage> for MessageResponse {
    fn from(message: StoredMessage) -> Self {
        Self {
            id: message.id.to_string(),
            role: message.role,
            content: message.content,
            sentiment: message.sentiment,
            sentiment_score: message.sentiment_score.map(|s| s.value()),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

/// Full conversation view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    pub id: String,
    pub messages: Vec<MessageResponse>,
    pub overall_sentiment: Option<Sentiment>,
    pub overall_score: Option<f64>,
}

impl From<ConversationView> for ConversationResponse {
    fn from(view: ConversationView) -> Self {
        Self {
            id: view.conversation.id.to_string(),
            messages: view.messages.into_iter().map(Into::into).collect(),
            overall_sentiment: view.conversation.overall_sentiment,
            overall_score: view.conversation.overall_score.map(|s| s.value()),
        }
    }
}

/// Response for conversation-level sentiment analysis.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentAnalysisResponse {
    pub conversation_id: String,
    pub overall_sentiment: Sentiment,
    pub overall_score: f64,
    pub summary: String,
    pub message_count: usize,
}

impl From<AnalyzeConversationResult> for SentimentAnalysisResponse {
    fn from(result: AnalyzeConversationResult) -> Self {
        Self {
            conversation_id: result.conversation_id.to_string(),
            overall_sentiment: result.sentiment.sentiment,
            overall_score: result.sentiment.score.value(),
            summary: result.sentiment.detail,
            message_count: result.message_count,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
