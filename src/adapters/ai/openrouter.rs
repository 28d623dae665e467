//! OpenRouter gateway - Implementation of CompletionGateway for OpenRouter's API.
//!
//! OpenRouter exposes an OpenAI-compatible chat completions endpoint fronting
//! many hosted models.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenRouterConfig::new(api_key)
//!     .with_model("meta-llama/llama-3.1-8b-instruct:free")
//!     .with_base_url("https://openrouter.ai/api/v1");
//!
//! let gateway = OpenRouterGateway::new(config);
//! ```
//!
//! # Degradation
//!
//! The inner request path reports [`CompletionError`]; the trait impl logs
//! the error and substitutes [`DEGRADED_SERVICE_REPLY`]. Requests are not
//! retried: a slow backend would stack delays onto an interactive chat.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::chat::ChatMessage;
use crate::ports::{CompletionError, CompletionGateway, DEGRADED_SERVICE_REPLY};

/// Configuration for the OpenRouter gateway.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model identifier (e.g., "meta-llama/llama-3.1-8b-instruct:free").
    pub model: String,
    /// Base URL for the API (default: https://openrouter.ai/api/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenRouterConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "meta-llama/llama-3.1-8b-instruct:free".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenRouter API gateway implementation.
pub struct OpenRouterGateway {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterGateway {
    /// Creates a new OpenRouter gateway with the given configuration.
    pub fn new(config: OpenRouterConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts domain messages to OpenRouter's format.
    fn to_wire_request(&self, messages: &[ChatMessage]) -> WireRequest {
        WireRequest {
            model: self.config.model.clone(),
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
        }
    }

    /// The fallible request path. Errors never leave this adapter; the
    /// trait impl turns them into the degraded reply.
    async fn try_complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let request = self.to_wire_request(messages);

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    CompletionError::network(format!("Connection failed: {}", e))
                } else {
                    CompletionError::network(e.to_string())
                }
            })?;

        let response = self.check_status(response).await?;

        let wire_response: WireResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::malformed(format!("Failed to parse response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::malformed("No choices in response"))?;

        Ok(choice.message.content)
    }

    /// Maps non-success statuses to completion errors.
    async fn check_status(&self, response: Response) -> Result<Response, CompletionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(CompletionError::AuthenticationFailed),
            429 => Err(CompletionError::RateLimited),
            500..=599 => Err(CompletionError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(CompletionError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenRouterGateway {
    async fn complete(&self, messages: &[ChatMessage]) -> String {
        match self.try_complete(messages).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "completion request failed, degrading");
                DEGRADED_SERVICE_REPLY.to_string()
            }
        }
    }
}

// ----- OpenRouter API Types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = OpenRouterConfig::new("test-key")
            .with_model("openai/gpt-4o-mini")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_defaults_match_service() {
        let config = OpenRouterConfig::new("test-key");

        assert_eq!(config.model, "meta-llama/llama-3.1-8b-instruct:free");
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn completions_url_appends_path() {
        let gateway = OpenRouterGateway::new(OpenRouterConfig::new("test-key"));
        assert_eq!(
            gateway.completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn wire_request_uses_lowercase_roles() {
        let gateway = OpenRouterGateway::new(OpenRouterConfig::new("test-key"));
        let messages = vec![
            ChatMessage::user("Hello"),
            ChatMessage::assistant("Hi there"),
        ];

        let request = gateway.to_wire_request(&messages);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "meta-llama/llama-3.1-8b-instruct:free");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Hello");
        assert_eq!(json["messages"][1]["role"], "assistant");
    }

    #[test]
    fn wire_response_parses_first_choice() {
        let body = r#"{"id":"gen-123","choices":[{"message":{"role":"assistant","content":"Hello!"}}]}"#;
        let response: WireResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.choices[0].message.content, "Hello!");
    }

    #[tokio::test]
    async fn unreachable_backend_degrades() {
        // Port 9 (discard) is closed; the connection is refused immediately.
        let config = OpenRouterConfig::new("test-key")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(1));
        let gateway = OpenRouterGateway::new(config);

        let reply = gateway.complete(&[ChatMessage::user("Hello")]).await;

        assert_eq!(reply, DEGRADED_SERVICE_REPLY);
    }
}
