//! Chat command and query handlers.

mod analyze_conversation;
mod create_conversation;
mod get_conversation;
mod send_message;

pub use analyze_conversation::{
    AnalyzeConversationCommand, AnalyzeConversationHandler, AnalyzeConversationResult,
};
pub use create_conversation::{CreateConversationHandler, CreateConversationResult};
pub use get_conversation::{ConversationView, GetConversationHandler, GetConversationQuery};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
