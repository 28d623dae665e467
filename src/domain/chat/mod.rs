//! Chat module - Conversation roles, messages, and errors.

mod errors;
mod message;

pub use errors::ChatError;
pub use message::{ChatMessage, Role};
