//! Completion Gateway Adapters.
//!
//! Implementations of the CompletionGateway port.
//!
//! ## Available Adapters
//!
//! - `OpenRouterGateway` - OpenRouter's OpenAI-compatible completions API
//! - `MockCompletionGateway` - Scripted mock for testing

mod mock;
mod openrouter;

pub use mock::MockCompletionGateway;
pub use openrouter::{OpenRouterConfig, OpenRouterGateway};
