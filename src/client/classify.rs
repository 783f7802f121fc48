use std::fmt;

/// What the user is told when a turn fails after all retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMessage {
    Network,
    ServerUnavailable,
    RateLimited,
    Generic,
}

impl UserMessage {
    pub fn text(self) -> &'static str {
        match self {
            UserMessage::Network => "Network error. Please check your internet connection.",
            UserMessage::ServerUnavailable => {
                "Server is temporarily unavailable. Please try again later."
            }
            UserMessage::RateLimited => {
                "Too many requests. Please wait a moment before trying again."
            }
            UserMessage::Generic => "Oops! Something went wrong. Please try again.",
        }
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Maps an error message to a user-facing message. Checks are
/// case-sensitive substring tests and the first match wins.
pub fn classify(message: &str) -> UserMessage {
    if message.contains("Failed to fetch") {
        UserMessage::Network
    } else if message.contains("500") || message.contains("Internal Server Error") {
        UserMessage::ServerUnavailable
    } else if message.contains("Request failed with status 429") {
        UserMessage::RateLimited
    } else {
        UserMessage::Generic
    }
}
