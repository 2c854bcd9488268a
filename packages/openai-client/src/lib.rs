//! Pure OpenAI-compatible REST API client
//!
//! A clean, minimal client for chat completions against OpenAI or any
//! provider that speaks the same wire format (Groq, proxies, Azure).
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ChatRequest, Message};
//!
//! let client = OpenAIClient::new(api_key);
//!
//! let response = client.chat_completion(
//!     ChatRequest::new("gpt-4o-mini")
//!         .message(Message::user("Hello!"))
//!         .max_tokens(1024)
//!         .temperature(0.7),
//! ).await?;
//! ```
//!
//! # Other providers
//!
//! ```rust,ignore
//! let groq = OpenAIClient::new(key).with_base_url(GROQ_BASE_URL);
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default OpenAI API base URL.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Groq's OpenAI-compatible API base URL.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Pure OpenAI-compatible API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for Groq, Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and return the first choice.
    /// A provider-reported `{"error": {"message": ..}}` body becomes
    /// [`OpenAIError::Provider`] carrying the provider's message verbatim,
    /// whatever the HTTP status.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OpenAIError::Network(e.to_string()))?;

        if let Some(message) = provider_error_message(&body) {
            warn!(status = %status, error = %message, "Chat completion API error");
            return Err(OpenAIError::Provider(message));
        }

        if !status.is_success() {
            warn!(status = %status, error = %body, "Chat completion API error");
            return Err(OpenAIError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: types::ChatResponseRaw =
            serde_json::from_str(&body).map_err(|e| OpenAIError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(OpenAIError::EmptyCompletion)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok(ChatResponse { content })
    }
}

/// Extract the provider's error message from an `{"error": {"message": ..}}` body.
fn provider_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<types::ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test").with_base_url("https://custom.api.com/");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url, "https://custom.api.com");
    }

    #[test]
    fn test_default_base_url() {
        let client = OpenAIClient::new("sk-test");
        assert_eq!(client.base_url(), OPENAI_BASE_URL);
    }

    #[test]
    fn test_provider_error_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        assert_eq!(provider_error_message(body).as_deref(), Some("Invalid API Key"));

        let ok = r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#;
        assert_eq!(provider_error_message(ok), None);
        assert_eq!(provider_error_message("not json"), None);
    }
}
