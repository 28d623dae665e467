//! PostgreSQL implementation of ConversationStore.
//!
//! Persists conversations and messages to PostgreSQL. Messages are
//! append-only; conversation rows only ever change their overall
//! sentiment columns.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::Role;
use crate::domain::foundation::{ConversationId, MessageId, Timestamp};
use crate::domain::sentiment::{Sentiment, SentimentScore};
use crate::ports::{ConversationRecord, ConversationStore, NewMessage, StoreError, StoredMessage};

/// PostgreSQL implementation of ConversationStore.
#[derive(Clone)]
pub struct PostgresConversationStore {
    pool: PgPool,
}

impl PostgresConversationStore {
    /// Creates a new PostgresConversationStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationStore for PostgresConversationStore {
    async fn create_conversation(&self) -> Result<ConversationRecord, StoreError> {
        let id = ConversationId::new();
        let created_at = Timestamp::now();

        sqlx::query(
            r#"
            INSERT INTO conversations (id, created_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(id.as_uuid())
        .bind(created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database(format!("Failed to insert conversation: {}", e)))?;

        Ok(ConversationRecord {
            id,
            created_at,
            overall_sentiment: None,
            overall_score: None,
        })
    }

    async fn find_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<ConversationRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, created_at, overall_sentiment, overall_score
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::database(format!("Failed to fetch conversation: {}", e)))?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let id_uuid: uuid::Uuid = row.get("id");
        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
        let overall_sentiment: Option<String> = row.get("overall_sentiment");
        let overall_score: Option<f64> = row.get("overall_score");

        Ok(Some(ConversationRecord {
            id: ConversationId::from_uuid(id_uuid),
            created_at: Timestamp::from_datetime(created_at),
            overall_sentiment: str_to_sentiment(overall_sentiment.as_deref()),
            overall_score: overall_score.map(SentimentScore::clamped),
        }))
    }

    async fn append_message(&self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        let id = MessageId::new();
        let created_at = Timestamp::now();

        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, role, content, sentiment, sentiment_score, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.as_uuid())
        .bind(message.conversation_id.as_uuid())
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.sentiment.map(|s| s.as_str()))
        .bind(message.sentiment_score.map(|s| s.value()))
        .bind(created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error().and_then(|db| db.code()) {
            // 23503: foreign key violation
            Some(code) if code == "23503" => StoreError::NotFound(message.conversation_id),
            _ => StoreError::database(format!("Failed to insert message: {}", e)),
        })?;

        Ok(StoredMessage {
            id,
            conversation_id: message.conversation_id,
            role: message.role,
            content: message.content,
            sentiment: message.sentiment,
            sentiment_score: message.sentiment_score,
            created_at,
        })
    }

    async fn list_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<StoredMessage>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, conversation_id, role, content, sentiment, sentiment_score, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database(format!("Failed to fetch messages: {}", e)))?;

        let messages = rows
            .iter()
            .map(|row| {
                let id: uuid::Uuid = row.get("id");
                let conversation_id: uuid::Uuid = row.get("conversation_id");
                let role: String = row.get("role");
                let content: String = row.get("content");
                let sentiment: Option<String> = row.get("sentiment");
                let sentiment_score: Option<f64> = row.get("sentiment_score");
                let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

                StoredMessage {
                    id: MessageId::from_uuid(id),
                    conversation_id: ConversationId::from_uuid(conversation_id),
                    role: str_to_role(&role),
                    content,
                    sentiment: str_to_sentiment(sentiment.as_deref()),
                    sentiment_score: sentiment_score.map(SentimentScore::clamped),
                    created_at: Timestamp::from_datetime(created_at),
                }
            })
            .collect();

        Ok(messages)
    }

    async fn set_overall_sentiment(
        &self,
        conversation_id: &ConversationId,
        sentiment: Sentiment,
        score: SentimentScore,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE conversations
            SET overall_sentiment = $2, overall_score = $3
            WHERE id = $1
            "#,
        )
        .bind(conversation_id.as_uuid())
        .bind(sentiment.as_str())
        .bind(score.value())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database(format!("Failed to update sentiment: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(*conversation_id));
        }

        Ok(())
    }
}

// === Helper Functions ===

fn str_to_role(s: &str) -> Role {
    match s {
        "assistant" => Role::Assistant,
        _ => Role::User, // Default fallback
    }
}

fn str_to_sentiment(s: Option<&str>) -> Option<Sentiment> {
    s.and_then(Sentiment::from_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_to_role_maps_wire_forms() {
        assert_eq!(str_to_role("user"), Role::User);
        assert_eq!(str_to_role("assistant"), Role::Assistant);
    }

    #[test]
    fn str_to_role_defaults_unknown_to_user() {
        assert_eq!(str_to_role("system"), Role::User);
    }

    #[test]
    fn str_to_sentiment_maps_stored_labels() {
        assert_eq!(
            str_to_sentiment(Some("positive")),
            Some(Sentiment::Positive)
        );
        assert_eq!(str_to_sentiment(Some("bogus")), None);
        assert_eq!(str_to_sentiment(None), None);
    }
}
