use serde::{Deserialize, Serialize};

/// Body of `POST /emails`.
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

/// Successful `POST /emails` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SendEmailResponse {
    pub id: Option<String>,
}

/// Error body returned by Resend, e.g.
/// `{"statusCode":422,"name":"validation_error","message":"..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResendErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    pub name: Option<String>,
    pub message: String,
}
