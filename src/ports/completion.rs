//! Completion gateway port - interface for chat completion backends.
//!
//! The gateway is the resilience boundary for the whole service: callers
//! receive plain text and never an error. Implementations hold an inner
//! fallible client and substitute [`DEGRADED_SERVICE_REPLY`] when that
//! client fails for any reason.
//!
//! # Design
//!
//! - Trait surface is infallible; failures become a degraded reply
//! - No retries: a failed request degrades immediately
//! - Callers must not special-case the degraded sentence

use async_trait::async_trait;

use crate::domain::chat::ChatMessage;

/// Reply substituted for the model's answer when the backend fails.
pub const DEGRADED_SERVICE_REPLY: &str =
    "I'm sorry, I encountered an error processing your request.";

/// Port for chat completion backends.
///
/// Implementations connect to an external model API and translate between
/// its wire format and [`ChatMessage`]. The trait-level `complete` never
/// fails; the inner request path reports [`CompletionError`] and the
/// implementation maps every error to [`DEGRADED_SERVICE_REPLY`].
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Generate a completion for the given message history.
    ///
    /// Returns the model's reply, or [`DEGRADED_SERVICE_REPLY`] when the
    /// backend is unreachable, times out, or answers with garbage.
    async fn complete(&self, messages: &[ChatMessage]) -> String;
}

/// Completion backend errors.
///
/// These never cross the [`CompletionGateway`] trait boundary; they exist
/// so implementations can log what went wrong before degrading.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the backend.
    #[error("rate limited")]
    RateLimited,

    /// Backend is unavailable.
    #[error("backend unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Response body did not match the expected shape.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
