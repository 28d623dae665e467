//! Sentiment chat service entrypoint.
//!
//! Loads configuration, connects to PostgreSQL, wires the application
//! handlers to their adapters and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sentiment_chat::adapters::ai::{OpenRouterConfig, OpenRouterGateway};
use sentiment_chat::adapters::http::{chat_routes, ChatHandlers};
use sentiment_chat::adapters::postgres::PostgresConversationStore;
use sentiment_chat::application::handlers::chat::{
    AnalyzeConversationHandler, CreateConversationHandler, GetConversationHandler,
    SendMessageHandler,
};
use sentiment_chat::config::{AppConfig, ServerConfig};
use sentiment_chat::ports::{CompletionGateway, ConversationStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    // RUST_LOG wins over the configured filter when set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting sentiment chat service");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let ai_config = OpenRouterConfig::new(
        config.ai.openrouter_api_key.clone().unwrap_or_default(),
    )
    .with_model(config.ai.model.clone())
    .with_base_url(config.ai.base_url.clone())
    .with_timeout(config.ai.timeout());

    let gateway: Arc<dyn CompletionGateway> = Arc::new(OpenRouterGateway::new(ai_config));
    let store: Arc<dyn ConversationStore> = Arc::new(PostgresConversationStore::new(pool));

    let handlers = ChatHandlers::new(
        Arc::new(CreateConversationHandler::new(store.clone())),
        Arc::new(SendMessageHandler::new(store.clone(), gateway.clone())),
        Arc::new(GetConversationHandler::new(store.clone())),
        Arc::new(AnalyzeConversationHandler::new(store, gateway)),
    );

    let app = Router::new()
        .nest("/api", chat_routes(handlers))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(&config.server))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                ))),
        );

    let addr = config.server.socket_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// GET /health - Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Builds the CORS layer from configured origins.
///
/// With no origins configured the layer is permissive, which suits local
/// development. Production deployments should set explicit origins.
fn build_cors(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Resolves when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
        info!("Received SIGTERM, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
