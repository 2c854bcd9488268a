// LLM implementation over OpenAI-compatible chat completions
//
// This is the infrastructure implementation of BaseAI. Groq and OpenAI speak
// the same wire format, so one implementation serves both; the provider
// table decides base URL and model.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, GROQ_BASE_URL, OPENAI_BASE_URL};

use super::BaseAI;
use crate::config::{Config, GROQ_API_KEY, OPENAI_API_KEY};

/// Fixed per-call generation settings.
pub const MAX_TOKENS: u32 = 1024;
pub const TEMPERATURE: f32 = 0.7;

/// Static description of an LLM provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmProvider {
    pub name: &'static str,
    /// Environment variable holding the API key
    pub credential_var: &'static str,
    pub base_url: &'static str,
    pub model: &'static str,
}

pub const GROQ: LlmProvider = LlmProvider {
    name: "Groq",
    credential_var: GROQ_API_KEY,
    base_url: GROQ_BASE_URL,
    model: "llama-3.3-70b-versatile",
};

pub const OPENAI: LlmProvider = LlmProvider {
    name: "OpenAI",
    credential_var: OPENAI_API_KEY,
    base_url: OPENAI_BASE_URL,
    model: "gpt-4o-mini",
};

/// Providers in priority order: the first with a credential wins.
pub const LLM_PROVIDERS: [LlmProvider; 2] = [GROQ, OPENAI];

/// Pick the first provider whose credential is configured.
pub fn select_provider(config: &Config) -> Option<(LlmProvider, &str)> {
    LLM_PROVIDERS.iter().find_map(|provider| {
        config
            .credential(provider.credential_var)
            .map(|key| (*provider, key))
    })
}

/// Error message returned when no provider credential is configured.
pub fn no_provider_message() -> String {
    let names: Vec<&str> = LLM_PROVIDERS.iter().map(|p| p.credential_var).collect();
    format!("No API key configured. Set {}", names.join(" or "))
}

/// BaseAI backed by an OpenAI-compatible chat completions endpoint
#[derive(Clone)]
pub struct ChatCompletionAI {
    client: OpenAIClient,
    provider: LlmProvider,
}

impl ChatCompletionAI {
    pub fn new(provider: LlmProvider, api_key: impl Into<String>) -> Self {
        let client = OpenAIClient::new(api_key).with_base_url(provider.base_url);
        Self { client, provider }
    }

    /// Point the client somewhere else (proxies, local mocks).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    pub fn provider(&self) -> LlmProvider {
        self.provider
    }
}

#[async_trait]
impl BaseAI for ChatCompletionAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(self.provider.model)
            .message(Message::user(prompt))
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE);

        tracing::info!(
            provider = self.provider.name,
            model = self.provider.model,
            prompt_length = prompt.len(),
            "Calling LLM provider"
        );

        let response = self.client.chat_completion(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                provider = self.provider.name,
                "LLM provider call failed"
            );
            anyhow!(e)
        })?;

        tracing::info!(
            provider = self.provider.name,
            response_length = response.content.len(),
            "LLM provider response received"
        );

        Ok(response.content)
    }

    fn provider_name(&self) -> &str {
        self.provider.name
    }
}
