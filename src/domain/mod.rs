//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `chat` - Conversation roles, messages, and chat errors
//! - `sentiment` - Sentiment types, prompt builders, and response extraction

pub mod chat;
pub mod foundation;
pub mod sentiment;
