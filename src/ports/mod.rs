//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionGateway` - Chat completion backend, infallible by contract
//! - `ConversationStore` - Conversation and message persistence

mod completion;
mod store;

pub use completion::{CompletionError, CompletionGateway, DEGRADED_SERVICE_REPLY};
pub use store::{ConversationRecord, ConversationStore, NewMessage, StoreError, StoredMessage};
