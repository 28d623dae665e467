//! Mock completion gateway for testing.
//!
//! Provides a scripted implementation of the CompletionGateway port,
//! allowing tests to run without calling a real model API.
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockCompletionGateway::new()
//!     .with_reply(r#"{"sentiment": "positive", "score": 0.9}"#)
//!     .with_reply("That sounds wonderful!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::chat::ChatMessage;
use crate::ports::{CompletionGateway, DEGRADED_SERVICE_REPLY};

/// Mock completion gateway with scripted replies.
///
/// Replies are consumed in order; once exhausted, a fixed default is
/// returned. Every call is recorded for verification.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionGateway {
    /// Scripted replies (consumed in order).
    replies: Arc<Mutex<VecDeque<String>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockCompletionGateway {
    /// Creates a new mock gateway with no scripted replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reply to the script.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(reply.into());
        self
    }

    /// Adds the degraded service reply to the script, as a failing
    /// backend would produce.
    pub fn with_degraded_reply(self) -> Self {
        self.with_reply(DEGRADED_SERVICE_REPLY)
    }

    /// Returns the number of calls made to this gateway.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl CompletionGateway for MockCompletionGateway {
    async fn complete(&self, messages: &[ChatMessage]) -> String {
        self.calls.lock().unwrap().push(messages.to_vec());

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "Mock reply".to_string())
    }
}
