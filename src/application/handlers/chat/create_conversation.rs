//! CreateConversationHandler - Command handler for starting new conversations.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::ConversationId;
use crate::ports::ConversationStore;

/// Result of successful conversation creation.
#[derive(Debug, Clone)]
pub struct CreateConversationResult {
    pub conversation_id: ConversationId,
}

/// Handler for starting conversations.
pub struct CreateConversationHandler {
    store: Arc<dyn ConversationStore>,
}

impl CreateConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<CreateConversationResult, ChatError> {
        let record = self.store.create_conversation().await?;

        Ok(CreateConversationResult {
            conversation_id: record.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationStore;

    #[tokio::test]
    async fn creates_an_empty_conversation() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = CreateConversationHandler::new(store.clone());

        let result = handler.handle().await.unwrap();

        let record = store
            .find_conversation(&result.conversation_id)
            .await
            .unwrap()
            .expect("conversation should exist");
        assert!(record.overall_sentiment.is_none());
        assert_eq!(store.message_count().await, 0);
    }

    #[tokio::test]
    async fn each_conversation_gets_a_distinct_id() {
        let store = Arc::new(InMemoryConversationStore::new());
        let handler = CreateConversationHandler::new(store);

        let first = handler.handle().await.unwrap();
        let second = handler.handle().await.unwrap();

        assert_ne!(first.conversation_id, second.conversation_id);
    }
}
