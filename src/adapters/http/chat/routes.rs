//! Chat HTTP routes.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    analyze_sentiment, create_conversation, get_conversation, send_chat_message, ChatHandlers,
};

/// Creates the chat router.
///
/// # Routes
///
/// - `POST /conversation/new` - Start a new conversation
/// - `GET /conversation/:id` - Fetch a conversation with history
/// - `POST /chat` - Send a message and receive a reply
/// - `POST /sentiment/:id` - Analyze overall conversation sentiment
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/conversation/new", post(create_conversation))
        .route("/conversation/:id", get(get_conversation))
        .route("/chat", post(send_chat_message))
        .route("/sentiment/:id", post(analyze_sentiment))
        .with_state(handlers)
}
