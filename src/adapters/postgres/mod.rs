//! PostgreSQL adapters - Database implementations for store ports.
//!
//! - `PostgresConversationStore` - Conversation and message persistence

mod conversation_store;

pub use conversation_store::PostgresConversationStore;
