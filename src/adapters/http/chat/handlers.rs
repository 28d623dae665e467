//! HTTP handlers for chat endpoints.
//!
//! Thin translation layer: extract request data, call the application
//! handler, map the outcome onto HTTP status codes and DTOs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::chat::{
    AnalyzeConversationCommand, AnalyzeConversationHandler, CreateConversationHandler,
    GetConversationHandler, GetConversationQuery, SendMessageCommand, SendMessageHandler,
};
use crate::domain::chat::ChatError;
use crate::domain::foundation::ConversationId;

use super::dto::{
    ChatRequest, ChatResponse, ConversationResponse, ErrorResponse, NewConversationResponse,
    SentimentAnalysisResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application handlers shared across chat routes.
#[derive(Clone)]
pub struct ChatHandlers {
    pub create_conversation: Arc<CreateConversationHandler>,
    pub send_message: Arc<SendMessageHandler>,
    pub get_conversation: Arc<GetConversationHandler>,
    pub analyze_conversation: Arc<AnalyzeConversationHandler>,
}

impl ChatHandlers {
    pub fn new(
        create_conversation: Arc<CreateConversationHandler>,
        send_message: Arc<SendMessageHandler>,
        get_conversation: Arc<GetConversationHandler>,
        analyze_conversation: Arc<AnalyzeConversationHandler>,
    ) -> Self {
        Self {
            create_conversation,
            send_message,
            get_conversation,
            analyze_conversation,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /conversation/new - Start a new conversation.
pub async fn create_conversation(State(handlers): State<ChatHandlers>) -> Response {
    match handlers.create_conversation.handle().await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(NewConversationResponse {
                conversation_id: result.conversation_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// POST /chat - Send a message and receive the assistant's reply.
pub async fn send_chat_message(
    State(handlers): State<ChatHandlers>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let conversation_id = match request.conversation_id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid conversation ID")),
            )
                .into_response()
        }
    };

    let command = SendMessageCommand {
        conversation_id,
        message: request.message,
    };

    match handlers.send_message.handle(command).await {
        Ok(result) => (StatusCode::OK, Json(ChatResponse::from(result))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// GET /conversation/:id - Fetch a conversation with its full history.
pub async fn get_conversation(
    State(handlers): State<ChatHandlers>,
    Path(id): Path<String>,
) -> Response {
    let conversation_id = match id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid conversation ID")),
            )
                .into_response()
        }
    };

    let query = GetConversationQuery { conversation_id };

    match handlers.get_conversation.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(ConversationResponse::from(view))).into_response(),
        Err(e) => handle_chat_error(e),
    }
}

/// POST /sentiment/:id - Analyze the overall sentiment of a conversation.
pub async fn analyze_sentiment(
    State(handlers): State<ChatHandlers>,
    Path(id): Path<String>,
) -> Response {
    let conversation_id = match id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid conversation ID")),
            )
                .into_response()
        }
    };

    let command = AnalyzeConversationCommand { conversation_id };

    match handlers.analyze_conversation.handle(command).await {
        Ok(result) => (
            StatusCode::OK,
            Json(SentimentAnalysisResponse::from(result)),
        )
            .into_response(),
        Err(e) => handle_chat_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps chat errors to HTTP responses.
fn handle_chat_error(error: ChatError) -> Response {
    match error {
        ChatError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Conversation", &id.to_string())),
        )
            .into_response(),
        // An analyzable conversation needs at least one message, so an
        // empty history surfaces the same way as a missing one.
        ChatError::Empty(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(
                "Conversation history",
                &id.to_string(),
            )),
        )
            .into_response(),
        ChatError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ChatError::Infrastructure(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(error.message())),
        )
            .into_response(),
    }
}
