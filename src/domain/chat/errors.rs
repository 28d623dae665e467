//! Chat-specific errors.

use crate::domain::foundation::{ConversationId, ErrorCode};

/// Errors surfaced by chat operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Conversation was not found.
    NotFound(ConversationId),
    /// Conversation exists but holds no messages to analyze.
    Empty(ConversationId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ChatError {
    pub fn not_found(id: ConversationId) -> Self {
        ChatError::NotFound(id)
    }

    pub fn empty(id: ConversationId) -> Self {
        ChatError::Empty(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ChatError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ChatError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::NotFound(_) => ErrorCode::ConversationNotFound,
            ChatError::Empty(_) => ErrorCode::ConversationEmpty,
            ChatError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ChatError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ChatError::NotFound(id) => format!("Conversation not found: {}", id),
            ChatError::Empty(id) => format!("Conversation has no messages: {}", id),
            ChatError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ChatError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ChatError {}
