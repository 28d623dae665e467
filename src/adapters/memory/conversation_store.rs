//! In-Memory Conversation Store Adapter
//!
//! Stores conversations and messages in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ConversationId, MessageId, Timestamp};
use crate::domain::sentiment::{Sentiment, SentimentScore};
use crate::ports::{ConversationRecord, ConversationStore, NewMessage, StoreError, StoredMessage};

/// In-memory storage for conversations and messages.
///
/// Messages live in a single Vec, so listing preserves append order
/// without relying on timestamps.
#[derive(Debug, Clone)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, ConversationRecord>>>,
    messages: Arc<RwLock<Vec<StoredMessage>>>,
}

impl InMemoryConversationStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            conversations: Arc::new(RwLock::new(HashMap::new())),
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.conversations.write().await.clear();
        self.messages.write().await.clear();
    }

    /// Get the number of stored conversations
    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }

    /// Get the number of stored messages across all conversations
    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create_conversation(&self) -> Result<ConversationRecord, StoreError> {
        let record = ConversationRecord {
            id: ConversationId::new(),
            created_at: Timestamp::now(),
            overall_sentiment: None,
            overall_score: None,
        };

        let mut conversations = self.conversations.write().await;
        conversations.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, StoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.get(id).cloned())
    }

    async fn append_message(&self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        let conversations = self.conversations.read().await;
        if !conversations.contains_key(&message.conversation_id) {
            return Err(StoreError::NotFound(message.conversation_id));
        }
        drop(conversations);

        let stored = StoredMessage {
            id: MessageId::new(),
            conversation_id: message.conversation_id,
            role: message.role,
            content: message.content,
            sentiment: message.sentiment,
            sentiment_score: message.sentiment_score,
            created_at: Timestamp::now(),
        };

        let mut messages = self.messages.write().await;
        messages.push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<StoredMessage>, StoreError> {
        let messages = self.messages.read().await;
        Ok(messages
            .iter()
            .filter(|m| m.conversation_id == *conversation_id)
            .cloned()
            .collect())
    }

    async fn set_overall_sentiment(
        &self,
        conversation_id: &ConversationId,
        sentiment: Sentiment,
        score: SentimentScore,
    ) -> Result<(), StoreError> {
        let mut conversations = self.conversations.write().await;
        let record = conversations
            .get_mut(conversation_id)
            .ok_or(StoreError::NotFound(*conversation_id))?;

        record.overall_sentiment = Some(sentiment);
        record.overall_score = Some(score);
        Ok(())
    }
}
