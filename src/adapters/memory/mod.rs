//! In-memory adapters for testing and development.
//!
//! - `InMemoryConversationStore` - Conversation persistence without a database

mod conversation_store;

pub use conversation_store::InMemoryConversationStore;
