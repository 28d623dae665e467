//! AnalyzeConversationHandler - Command handler for conversation-level sentiment.
//!
//! Builds one prompt over the user side of the conversation and asks the
//! model for an overall verdict with a short summary. The verdict is
//! persisted on the conversation row.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatMessage, Role};
use crate::domain::foundation::ConversationId;
use crate::domain::sentiment::prompt::conversation_prompt;
use crate::domain::sentiment::{AnalysisScope, SentimentExtractor, SentimentResult};
use crate::ports::{CompletionGateway, ConversationStore};

/// Command to analyze the overall sentiment of a conversation.
#[derive(Debug, Clone)]
pub struct AnalyzeConversationCommand {
    pub conversation_id: ConversationId,
}

/// Result of a conversation-level analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeConversationResult {
    pub conversation_id: ConversationId,
    pub sentiment: SentimentResult,
    /// Number of user messages the verdict is based on.
    pub message_count: usize,
}

/// Handler for conversation-level sentiment analysis.
pub struct AnalyzeConversationHandler {
    store: Arc<dyn ConversationStore>,
    gateway: Arc<dyn CompletionGateway>,
    extractor: SentimentExtractor,
}

impl AnalyzeConversationHandler {
    pub fn new(store: Arc<dyn ConversationStore>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            store,
            gateway,
            extractor: SentimentExtractor::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeConversationCommand,
    ) -> Result<AnalyzeConversationResult, ChatError> {
        // 1. Ensure the conversation exists and has history
        self.store
            .find_conversation(&cmd.conversation_id)
            .await?
            .ok_or_else(|| ChatError::not_found(cmd.conversation_id))?;

        let messages = self.store.list_messages(&cmd.conversation_id).await?;
        if messages.is_empty() {
            return Err(ChatError::empty(cmd.conversation_id));
        }

        // 2. Ask for the overall verdict; the prompt keeps user messages only
        let history: Vec<ChatMessage> = messages
            .iter()
            .map(|m| ChatMessage::new(m.role, m.content.clone()))
            .collect();
        let reply = self
            .gateway
            .complete(&[ChatMessage::user(conversation_prompt(&history))])
            .await;
        let sentiment = self.extractor.extract(&reply, AnalysisScope::Conversation);

        // 3. Persist the verdict on the conversation row
        self.store
            .set_overall_sentiment(&cmd.conversation_id, sentiment.sentiment, sentiment.score)
            .await?;

        let message_count = messages.iter().filter(|m| m.role == Role::User).count();

        Ok(AnalyzeConversationResult {
            conversation_id: cmd.conversation_id,
            sentiment,
            message_count,
        })
    }
}
