use thiserror::Error;

use super::classify::{UserMessage, classify};

/// A failed attempt to obtain a reply from the completion service.
///
/// Every variant is treated as transient by the retry loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AIError {
    /// The request never produced an HTTP response (connect, timeout, body read).
    #[error("Failed to fetch: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Received empty response from the server")]
    EmptyReply,

    #[error("Malformed response from the server: {0}")]
    MalformedResponse(String),
}

impl AIError {
    /// Builds a [`AIError::Server`] from a non-success response body.
    ///
    /// The body's `error` field is preferred, then `message`; otherwise the
    /// message names the status code.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|value| value.get(name))
                .and_then(serde_json::Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_owned)
        };

        let message = field("error")
            .or_else(|| field("message"))
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        AIError::Server { status, message }
    }

    pub fn user_message(&self) -> UserMessage {
        classify(&self.to_string())
    }
}
