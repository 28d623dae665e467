//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;

pub use chat::{
    AnalyzeConversationCommand, AnalyzeConversationHandler, AnalyzeConversationResult,
    ConversationView, CreateConversationHandler, CreateConversationResult,
    GetConversationHandler, GetConversationQuery, SendMessageCommand, SendMessageHandler,
    SendMessageResult,
};
