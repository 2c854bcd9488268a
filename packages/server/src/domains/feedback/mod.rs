//! Feedback relay: turns free text from the site into an outgoing email.

use crate::kernel::OutgoingEmail;

pub const FEEDBACK_SUBJECT: &str = "Обратная связь — Cold Format";

/// Body used when the visitor submitted nothing but whitespace.
pub const EMPTY_FEEDBACK_PLACEHOLDER: &str = "(пусто)";

/// Trimmed feedback text, or the placeholder when blank.
pub fn feedback_body(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => EMPTY_FEEDBACK_PLACEHOLDER.to_string(),
    }
}

pub fn compose_feedback_email(text: Option<&str>, recipient: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: vec![recipient.to_string()],
        subject: FEEDBACK_SUBJECT.to_string(),
        text: feedback_body(text),
    }
}
