//! Failures of a chat completion call.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpenAIError>;

#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Request could not be sent or its body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// `{"error": {"message": ..}}` reported by the provider, kept verbatim.
    #[error("{0}")]
    Provider(String),

    /// Non-2xx reply without a provider error envelope.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 2xx reply that is not a chat completion.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Completion came back without any choice content.
    #[error("No response from provider")]
    EmptyCompletion,
}
