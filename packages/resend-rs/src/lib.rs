// https://resend.com/docs/api-reference/emails/send-email

pub mod models;
use reqwest::{header, Client};
use thiserror::Error;

use crate::models::{ResendErrorBody, SendEmailRequest, SendEmailResponse};

pub const RESEND_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Error)]
pub enum ResendError {
    /// Resend reported a failure; carries its message verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Request to Resend failed: {0}")]
    Network(String),

    #[error("Error parsing Resend response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct ResendOptions {
    pub api_key: String,
    pub base_url: String,
}

impl ResendOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: RESEND_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResendService {
    options: ResendOptions,
    client: Client,
}

impl ResendService {
    pub fn new(options: ResendOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    pub async fn send_email(
        &self,
        email: &SendEmailRequest,
    ) -> Result<SendEmailResponse, ResendError> {
        let url = format!("{}/emails", self.options.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.options.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(email)
            .send()
            .await
            .map_err(|e| ResendError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ResendError::Network(e.to_string()))?;

        if !status.is_success() {
            // Prefer Resend's own message over the raw body
            return match serde_json::from_str::<ResendErrorBody>(&body) {
                Ok(error) => Err(ResendError::Api(error.message)),
                Err(_) => Err(ResendError::Api(format!("Resend returned {}: {}", status, body))),
            };
        }

        serde_json::from_str::<SendEmailResponse>(&body)
            .map_err(|e| ResendError::Parse(e.to_string()))
    }
}
