//! Errors surfaced by the product API adapter.

use contracts::shared::envelope::{display_text, first_present, FieldPath};
use thiserror::Error;

const MESSAGE_PATHS: [FieldPath; 3] = [
    FieldPath::new(&["message"]),
    FieldPath::new(&["error"]),
    FieldPath::new(&["meta", "message"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, timeout, CORS rejection.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx answer. `message` is the vendor's message when the body
    /// carried one, otherwise the raw body.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be assembled.
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    /// Build an [`ApiError::Http`] from a status and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| first_present(&json, &MESSAGE_PATHS).map(display_text))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("status {}", status)
                } else {
                    body.trim().to_string()
                }
            });
        ApiError::Http { status, message }
    }

    /// Text for a notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
