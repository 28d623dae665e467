//! GetConversationHandler - Query handler for retrieving conversation history.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::ConversationId;
use crate::ports::{ConversationRecord, ConversationStore, StoredMessage};

/// Query to get a conversation by ID.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub conversation_id: ConversationId,
}

/// A conversation with its full message history.
#[derive(Debug, Clone)]
pub struct ConversationView {
    pub conversation: ConversationRecord,
    pub messages: Vec<StoredMessage>,
}

/// Handler for retrieving conversation history.
pub struct GetConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl GetConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetConversationQuery) -> Result<ConversationView, ChatError> {
        let conversation = self
            .store
            .find_conversation(&query.conversation_id)
            .await?
            .ok_or_else(|| ChatError::not_found(query.conversation_id))?;

        let messages = self.store.list_messages(&query.conversation_id).await?;

        Ok(ConversationView {
            conversation,
            messages,
        })
    }
}
