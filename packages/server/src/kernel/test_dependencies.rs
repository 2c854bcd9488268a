// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseMailer, OutgoingEmail};

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    error: Option<String>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Fail every call with the given provider message
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(message) = &self.error {
            return Err(anyhow!("{}", message));
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            // Return default mock response
            Ok("Mock AI response".to_string())
        }
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

// =============================================================================
// Mock Mailer
// =============================================================================

pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    id: Option<String>,
    error: Option<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            id: Some("mock-email-id".to_string()),
            error: None,
        }
    }

    /// Report the given message id (or none) for every send
    pub fn with_id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(String::from);
        self
    }

    /// Fail every send with the given provider message
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Get all emails that were sent
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<Option<String>> {
        if let Some(message) = &self.error {
            return Err(anyhow!("{}", message));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(self.id.clone())
    }
}
