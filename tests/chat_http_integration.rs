//! Integration tests for chat HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring for chat operations:
//! 1. Request DTOs deserialize correctly
//! 2. Response DTOs serialize correctly
//! 3. Handlers can be created and wired together, and the full
//!    create / chat / analyze flow works end to end over the
//!    in-memory adapters

use serde_json::json;
use std::sync::Arc;

use sentiment_chat::adapters::ai::MockCompletionGateway;
use sentiment_chat::adapters::http::chat::{
    chat_routes, ChatHandlers, ChatRequest, ChatResponse, ConversationResponse,
    SentimentAnalysisResponse,
};
use sentiment_chat::adapters::memory::InMemoryConversationStore;
use sentiment_chat::application::handlers::chat::{
    AnalyzeConversationCommand, AnalyzeConversationHandler, CreateConversationHandler,
    GetConversationHandler, GetConversationQuery, SendMessageCommand, SendMessageHandler,
};
use sentiment_chat::domain::sentiment::Sentiment;
use sentiment_chat::ports::{CompletionGateway, ConversationStore, DEGRADED_SERVICE_REPLY};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    store: Arc<InMemoryConversationStore>,
    create: CreateConversationHandler,
    send: SendMessageHandler,
    get: GetConversationHandler,
    analyze: AnalyzeConversationHandler,
}

/// Wires all chat handlers over the in-memory store and a scripted gateway.
fn test_app(gateway: MockCompletionGateway) -> TestApp {
    let store = Arc::new(InMemoryConversationStore::new());
    let store_dyn: Arc<dyn ConversationStore> = store.clone();
    let gateway_dyn: Arc<dyn CompletionGateway> = Arc::new(gateway);

    TestApp {
        store,
        create: CreateConversationHandler::new(store_dyn.clone()),
        send: SendMessageHandler::new(store_dyn.clone(), gateway_dyn.clone()),
        get: GetConversationHandler::new(store_dyn.clone()),
        analyze: AnalyzeConversationHandler::new(store_dyn, gateway_dyn),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_handler_wiring() {
    // Verify all handlers can be created and wired into a router
    let store: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
    let gateway: Arc<dyn CompletionGateway> = Arc::new(MockCompletionGateway::new());

    let handlers = ChatHandlers::new(
        Arc::new(CreateConversationHandler::new(store.clone())),
        Arc::new(SendMessageHandler::new(store.clone(), gateway.clone())),
        Arc::new(GetConversationHandler::new(store.clone())),
        Arc::new(AnalyzeConversationHandler::new(store, gateway)),
    );

    let _router = chat_routes(handlers);

    // If we get here, the wiring is correct
}

#[test]
fn test_chat_request_deserializes() {
    // Verify request DTO deserializes correctly
    let json = json!({
        "conversation_id": "550e8400-e29b-41d4-a716-446655440000",
        "message": "Today was a great day"
    });

    let json_str = serde_json::to_string(&json).unwrap();
    let req: ChatRequest = serde_json::from_str(&json_str).unwrap();

    assert_eq!(req.conversation_id, "550e8400-e29b-41d4-a716-446655440000");
    assert_eq!(req.message, "Today was a great day");
}

#[tokio::test]
async fn test_chat_response_serializes() {
    let gateway = MockCompletionGateway::new()
        .with_reply(r#"{"sentiment": "positive", "score": 0.9, "explanation": "Upbeat"}"#)
        .with_reply("Glad to hear it!");
    let app = test_app(gateway);

    let conversation_id = app.create.handle().await.unwrap().conversation_id;
    let result = app
        .send
        .handle(SendMessageCommand {
            conversation_id,
            message: "Today was fantastic".to_string(),
        })
        .await
        .unwrap();

    let response: ChatResponse = result.into();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["response"], "Glad to hear it!");
    assert_eq!(json["sentiment"], "positive");
    assert_eq!(json["sentiment_score"], 0.9);
    assert_eq!(json["explanation"], "Upbeat");
}

#[tokio::test]
async fn test_conversation_response_serializes() {
    let gateway = MockCompletionGateway::new()
        .with_reply(r#"{"sentiment": "neutral", "score": 0.5}"#)
        .with_reply("Hello!");
    let app = test_app(gateway);

    let conversation_id = app.create.handle().await.unwrap().conversation_id;
    app.send
        .handle(SendMessageCommand {
            conversation_id,
            message: "Hi".to_string(),
        })
        .await
        .unwrap();

    let view = app
        .get
        .handle(GetConversationQuery { conversation_id })
        .await
        .unwrap();

    let response: ConversationResponse = view.into();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["id"], conversation_id.to_string());
    assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["sentiment"], "neutral");
    assert_eq!(json["messages"][1]["role"], "assistant");
    // Assistant replies carry no per-message sentiment
    assert!(json["messages"][1].get("sentiment").is_none());
    // Not analyzed yet
    assert!(json["overall_sentiment"].is_null());
}

#[tokio::test]
async fn test_sentiment_analysis_response_serializes() {
    let gateway = MockCompletionGateway::new()
        .with_reply(r#"{"sentiment": "positive", "score": 0.8, "explanation": "Happy"}"#)
        .with_reply("Wonderful!")
        .with_reply(r#"{"sentiment": "positive", "score": 0.85, "summary": "Upbeat overall"}"#);
    let app = test_app(gateway);

    let conversation_id = app.create.handle().await.unwrap().conversation_id;
    app.send
        .handle(SendMessageCommand {
            conversation_id,
            message: "I got the job!".to_string(),
        })
        .await
        .unwrap();

    let result = app
        .analyze
        .handle(AnalyzeConversationCommand { conversation_id })
        .await
        .unwrap();

    let response: SentimentAnalysisResponse = result.into();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["conversation_id"], conversation_id.to_string());
    assert_eq!(json["overall_sentiment"], "positive");
    assert_eq!(json["overall_score"], 0.85);
    assert_eq!(json["summary"], "Upbeat overall");
    assert_eq!(json["message_count"], 1);
}

#[tokio::test]
async fn test_full_conversation_flow() {
    let gateway = MockCompletionGateway::new()
        // First exchange: analysis, then reply
        .with_reply(r#"{"sentiment": "negative", "score": 0.2, "explanation": "Frustrated"}"#)
        .with_reply("I'm sorry to hear that.")
        // Second exchange
        .with_reply(r#"{"sentiment": "positive", "score": 0.8, "explanation": "Improving"}"#)
        .with_reply("That's a relief!")
        // Conversation-level analysis
        .with_reply(r#"{"sentiment": "neutral", "score": 0.5, "summary": "Mixed trajectory"}"#);
    let app = test_app(gateway);

    let conversation_id = app.create.handle().await.unwrap().conversation_id;

    app.send
        .handle(SendMessageCommand {
            conversation_id,
            message: "My day started terribly".to_string(),
        })
        .await
        .unwrap();
    app.send
        .handle(SendMessageCommand {
            conversation_id,
            message: "But it got much better".to_string(),
        })
        .await
        .unwrap();

    let view = app
        .get
        .handle(GetConversationQuery { conversation_id })
        .await
        .unwrap();
    assert_eq!(view.messages.len(), 4);

    let analysis = app
        .analyze
        .handle(AnalyzeConversationCommand { conversation_id })
        .await
        .unwrap();
    assert_eq!(analysis.sentiment.sentiment, Sentiment::Neutral);
    assert_eq!(analysis.sentiment.detail, "Mixed trajectory");
    // Only user messages count toward the analysis
    assert_eq!(analysis.message_count, 2);

    // The overall sentiment is persisted on the conversation
    let view = app
        .get
        .handle(GetConversationQuery { conversation_id })
        .await
        .unwrap();
    assert_eq!(view.conversation.overall_sentiment, Some(Sentiment::Neutral));
}

#[tokio::test]
async fn test_degraded_backend_never_breaks_the_flow() {
    // Every model call fails; the service still answers everything.
    let gateway = MockCompletionGateway::new()
        .with_degraded_reply()
        .with_degraded_reply()
        .with_degraded_reply();
    let app = test_app(gateway);

    let conversation_id = app.create.handle().await.unwrap().conversation_id;

    let result = app
        .send
        .handle(SendMessageCommand {
            conversation_id,
            message: "Anyone there?".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.reply, DEGRADED_SERVICE_REPLY);
    assert_eq!(result.sentiment.sentiment, Sentiment::Neutral);
    assert_eq!(result.sentiment.score.value(), 0.5);

    let analysis = app
        .analyze
        .handle(AnalyzeConversationCommand { conversation_id })
        .await
        .unwrap();
    assert_eq!(analysis.sentiment.sentiment, Sentiment::Neutral);

    // The degraded reply is stored like any other assistant message
    let messages = app.store.list_messages(&conversation_id).await.unwrap();
    assert_eq!(messages[1].content, DEGRADED_SERVICE_REPLY);
}
