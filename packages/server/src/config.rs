use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const RESEND_API_KEY: &str = "RESEND_API_KEY";

/// Resend's test inbox; override with `FEEDBACK_TO` in production.
pub const DEFAULT_FEEDBACK_TO: &str = "delivered@resend.dev";
pub const DEFAULT_PORT: u16 = 3001;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub resend_api_key: Option<String>,
    pub feedback_to: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            groq_api_key: None,
            openai_api_key: None,
            resend_api_key: None,
            feedback_to: DEFAULT_FEEDBACK_TO.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            groq_api_key: non_empty_var(GROQ_API_KEY),
            openai_api_key: non_empty_var(OPENAI_API_KEY),
            resend_api_key: non_empty_var(RESEND_API_KEY),
            feedback_to: non_empty_var("FEEDBACK_TO")
                .unwrap_or_else(|| DEFAULT_FEEDBACK_TO.to_string()),
        })
    }

    /// Look up a provider credential by its environment variable name.
    /// Empty values count as unset.
    pub fn credential(&self, name: &str) -> Option<&str> {
        let value = match name {
            GROQ_API_KEY => self.groq_api_key.as_deref(),
            OPENAI_API_KEY => self.openai_api_key.as_deref(),
            RESEND_API_KEY => self.resend_api_key.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
