//! Chat HTTP adapter.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, ChatResponse, ConversationResponse, ErrorResponse, MessageResponse,
    NewConversationResponse, SentimentAnalysisResponse,
};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
