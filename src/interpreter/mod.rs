//! Turns raw completion text into something a renderer can show.

mod markdown;
mod suggestions;

pub use markdown::format_markdown;
pub use suggestions::{RecipeSuggestion, parse_suggestions};

use tracing::{debug, warn};

use crate::client::AIReply;
use crate::prompt::ConversationMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretedResult {
    Suggestions(Vec<RecipeSuggestion>),
    /// HTML produced by [`format_markdown`].
    FormattedText(String),
    /// The reply exactly as received, shown when it could not be parsed.
    RawText(String),
}

pub fn interpret(reply: &AIReply, mode: ConversationMode) -> InterpretedResult {
    match mode {
        ConversationMode::Initial => {
            let suggestions = parse_suggestions(reply.as_str());
            if suggestions.is_empty() {
                debug!("Reply contained no suggestion headings, showing it verbatim");
                InterpretedResult::RawText(reply.as_str().to_string())
            } else {
                debug!(count = suggestions.len(), "Parsed recipe suggestions");
                InterpretedResult::Suggestions(suggestions)
            }
        }
        ConversationMode::Detail => match format_markdown(reply.as_str()) {
            Ok(html) => InterpretedResult::FormattedText(html),
            Err(err) => {
                warn!(error = %err, "Formatting failed, showing unformatted reply");
                InterpretedResult::FormattedText(reply.as_str().to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests;
