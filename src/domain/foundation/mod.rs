//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form
//! the vocabulary of the sentiment chat domain.

mod ids;
mod timestamp;
mod errors;

pub use ids::{ConversationId, MessageId};
pub use timestamp::Timestamp;
pub use errors::{ErrorCode, ValidationError};
