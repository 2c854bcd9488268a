//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the dependency container shared by all routes.
//! External services sit behind trait objects so tests can swap in mocks.

use anyhow::Result;
use async_trait::async_trait;
use resend::models::SendEmailRequest;
use resend::{ResendOptions, ResendService};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{select_provider, BaseAI, BaseMailer, ChatCompletionAI, OutgoingEmail};

/// Sender used for all outgoing mail.
pub const FEEDBACK_FROM: &str = "Cold Format <onboarding@resend.dev>";

// =============================================================================
// ResendService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around ResendService that implements BaseMailer trait
pub struct ResendAdapter {
    service: Arc<ResendService>,
    from: String,
}

impl ResendAdapter {
    pub fn new(service: Arc<ResendService>, from: impl Into<String>) -> Self {
        Self {
            service,
            from: from.into(),
        }
    }
}

#[async_trait]
impl BaseMailer for ResendAdapter {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<Option<String>> {
        let request = SendEmailRequest {
            from: self.from.clone(),
            to: email.to.clone(),
            subject: email.subject.clone(),
            text: email.text.clone(),
        };

        let sent = self.service.send_email(&request).await.map_err(|e| {
            tracing::error!(error = %e, "Resend delivery failed");
            anyhow::anyhow!("{}", e)
        })?;

        tracing::info!(id = ?sent.id, "Email accepted by Resend");
        Ok(sent.id)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
///
/// A `None` service means its credential is not configured; handlers turn
/// that into a configuration error at request time.
#[derive(Clone)]
pub struct ServerDeps {
    pub ai: Option<Arc<dyn BaseAI>>,
    pub mailer: Option<Arc<dyn BaseMailer>>,
    /// Fixed recipient of feedback emails
    pub feedback_to: String,
}

impl ServerDeps {
    pub fn new(
        ai: Option<Arc<dyn BaseAI>>,
        mailer: Option<Arc<dyn BaseMailer>>,
        feedback_to: impl Into<String>,
    ) -> Self {
        Self {
            ai,
            mailer,
            feedback_to: feedback_to.into(),
        }
    }

    /// Wire real providers from configuration.
    pub fn from_config(config: &Config) -> Self {
        let ai = select_provider(config).map(|(provider, key)| {
            Arc::new(ChatCompletionAI::new(provider, key)) as Arc<dyn BaseAI>
        });

        let mailer = config.resend_api_key.as_ref().map(|key| {
            let service = Arc::new(ResendService::new(ResendOptions::new(key.clone())));
            Arc::new(ResendAdapter::new(service, FEEDBACK_FROM)) as Arc<dyn BaseMailer>
        });

        Self::new(ai, mailer, config.feedback_to.clone())
    }

    pub fn ai_provider_name(&self) -> Option<&str> {
        self.ai.as_ref().map(|ai| ai.provider_name())
    }
}
