//! HTTP adapters - REST API implementations.

pub mod chat;

// Re-export key types for convenience
pub use chat::chat_routes;
pub use chat::ChatHandlers;
