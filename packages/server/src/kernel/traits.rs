// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to prompt for, what to email) lives in domains/.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseMailer)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Human-readable provider name for logs and health checks
    fn provider_name(&self) -> &str;
}

// =============================================================================
// Mailer Trait (Infrastructure - transactional email)
// =============================================================================

/// Email to deliver. The sender address belongs to the mailer implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send an email, returning the provider's message id when it reports one
    async fn send_email(&self, email: &OutgoingEmail) -> Result<Option<String>>;
}
