//! Conversation store port.
//!
//! Defines the contract for persisting conversations and their messages.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - Flat records, no aggregate loading: handlers fetch exactly what they need
//! - Messages are append-only and listed in creation order
//! - Sentiment columns are nullable; assistant messages carry none

use async_trait::async_trait;

use crate::domain::chat::{ChatError, Role};
use crate::domain::foundation::{ConversationId, MessageId, Timestamp};
use crate::domain::sentiment::{Sentiment, SentimentScore};

/// A conversation row as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRecord {
    /// Conversation identifier.
    pub id: ConversationId,
    /// When the conversation was created.
    pub created_at: Timestamp,
    /// Conversation-level sentiment, set by the analysis operation.
    pub overall_sentiment: Option<Sentiment>,
    /// Conversation-level score, set alongside the sentiment.
    pub overall_score: Option<SentimentScore>,
}

/// A message row as persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredMessage {
    /// Message identifier.
    pub id: MessageId,
    /// Conversation this message belongs to.
    pub conversation_id: ConversationId,
    /// Who sent the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Per-message sentiment, present for analyzed user messages.
    pub sentiment: Option<Sentiment>,
    /// Per-message score, present alongside the sentiment.
    pub sentiment_score: Option<SentimentScore>,
    /// When the message was appended.
    pub created_at: Timestamp,
}

/// A message to append, before the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    /// Conversation to append to.
    pub conversation_id: ConversationId,
    /// Who sent the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// Per-message sentiment, if analyzed.
    pub sentiment: Option<Sentiment>,
    /// Per-message score, if analyzed.
    pub sentiment_score: Option<SentimentScore>,
}

impl NewMessage {
    /// Creates a user message without sentiment.
    pub fn user(conversation_id: ConversationId, content: impl Into<String>) -> Self {
        Self {
            conversation_id,
            role: Role::User,
            content: content.into(),
            sentiment: None,
            sentiment_score: None,
        }
    }

    /// Creates an assistant message. Assistant replies are not analyzed.
    pub fn assistant(conversation_id: ConversationId, content: impl Into<String>) -> Self {
        Self {
            conversation_id,
            role: Role::Assistant,
            content: content.into(),
            sentiment: None,
            sentiment_score: None,
        }
    }

    /// Attaches an analyzed sentiment to the message.
    pub fn with_sentiment(mut self, sentiment: Sentiment, score: SentimentScore) -> Self {
        self.sentiment = Some(sentiment);
        self.sentiment_score = Some(score);
        self
    }
}

/// Store port for conversation and message persistence.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Create a new, empty conversation.
    ///
    /// # Errors
    ///
    /// - `Database` on persistence failure
    async fn create_conversation(&self) -> Result<ConversationRecord, StoreError>;

    /// Find a conversation by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, StoreError>;

    /// Append a message to a conversation.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the conversation doesn't exist
    /// - `Database` on persistence failure
    async fn append_message(&self, message: NewMessage) -> Result<StoredMessage, StoreError>;

    /// List all messages of a conversation in creation order.
    ///
    /// Returns an empty list for an unknown conversation; callers that need
    /// to distinguish check `find_conversation` first.
    async fn list_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<StoredMessage>, StoreError>;

    /// Set the conversation-level sentiment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the conversation doesn't exist
    /// - `Database` on persistence failure
    async fn set_overall_sentiment(
        &self,
        conversation_id: &ConversationId,
        sentiment: Sentiment,
        score: SentimentScore,
    ) -> Result<(), StoreError>;
}

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Conversation does not exist.
    #[error("conversation not found: {0}")]
    NotFound(ConversationId),

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

impl From<StoreError> for ChatError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ChatError::not_found(id),
            StoreError::Database(message) => ChatError::infrastructure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ConversationStore) {}
    }

    #[test]
    fn new_message_builders_work() {
        let conversation_id = ConversationId::new();
        let message = NewMessage::user(conversation_id, "Hello")
            .with_sentiment(Sentiment::Positive, SentimentScore::clamped(0.9));

        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "Hello");
        assert_eq!(message.sentiment, Some(Sentiment::Positive));
        assert_eq!(message.sentiment_score, Some(SentimentScore::clamped(0.9)));

        let reply = NewMessage::assistant(conversation_id, "Hi there");
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.sentiment.is_none());
    }

    #[test]
    fn store_errors_map_to_chat_errors() {
        let id = ConversationId::new();

        let err: ChatError = StoreError::NotFound(id).into();
        assert_eq!(err, ChatError::not_found(id));

        let err: ChatError = StoreError::database("connection lost").into();
        assert!(matches!(err, ChatError::Infrastructure(_)));
    }
}
