//! SendMessageHandler - Command handler for the chat exchange.
//!
//! One user message produces two model calls: a sentiment analysis of the
//! message on its own, then a reply generated from the full history. The
//! analyzed sentiment is stored on the user message and returned with the
//! reply.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatMessage};
use crate::domain::foundation::ConversationId;
use crate::domain::sentiment::prompt::single_message_prompt;
use crate::domain::sentiment::{AnalysisScope, SentimentExtractor, SentimentResult};
use crate::ports::{CompletionGateway, ConversationStore, NewMessage};

/// Command to send a message in an existing conversation.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub conversation_id: ConversationId,
    pub message: String,
}

/// Result of a successful chat exchange.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub reply: String,
    pub sentiment: SentimentResult,
}

/// Handler for the chat exchange.
pub struct SendMessageHandler {
    store: Arc<dyn ConversationStore>,
    gateway: Arc<dyn CompletionGateway>,
    extractor: SentimentExtractor,
}

impl SendMessageHandler {
    pub fn new(store: Arc<dyn ConversationStore>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            store,
            gateway,
            extractor: SentimentExtractor::new(),
        }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, ChatError> {
        // 1. Validate input
        if cmd.message.trim().is_empty() {
            return Err(ChatError::validation("message", "Message must not be empty"));
        }

        // 2. Ensure the conversation exists
        self.store
            .find_conversation(&cmd.conversation_id)
            .await?
            .ok_or_else(|| ChatError::not_found(cmd.conversation_id))?;

        // 3. Analyze the user message on its own
        let analysis_reply = self
            .gateway
            .complete(&[ChatMessage::user(single_message_prompt(&cmd.message))])
            .await;
        let sentiment = self
            .extractor
            .extract(&analysis_reply, AnalysisScope::Message);

        // 4. Persist the user message with its sentiment
        let user_message = NewMessage::user(cmd.conversation_id, cmd.message.clone())
            .with_sentiment(sentiment.sentiment, sentiment.score);
        self.store.append_message(user_message).await?;

        // 5. Generate the reply from the full history, user message included
        let history: Vec<ChatMessage> = self
            .store
            .list_messages(&cmd.conversation_id)
            .await?
            .into_iter()
            .map(|m| ChatMessage::new(m.role, m.content))
            .collect();
        let reply = self.gateway.complete(&history).await;

        // 6. Persist the assistant reply; assistant replies are not analyzed
        self.store
            .append_message(NewMessage::assistant(cmd.conversation_id, reply.clone()))
            .await?;

        Ok(SendMessageResult { reply, sentiment })
    }
}
