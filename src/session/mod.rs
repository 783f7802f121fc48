//! Drives one chat conversation: picks the mode, builds the prompt, calls
//! the client and interprets the reply.

use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::client::{AIClient, HttpTransport, Transport, UserMessage};
use crate::interpreter::{InterpretedResult, RecipeSuggestion, interpret};
use crate::prompt::{ConversationMode, Prompt};

/// Outcome of a single user turn, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Reply(InterpretedResult),
    Failure(UserMessage),
}

pub struct ChatSession<T = HttpTransport> {
    client: AIClient<T>,
    shown: Option<Vec<RecipeSuggestion>>,
}

impl<T: Transport> ChatSession<T> {
    pub fn new(client: AIClient<T>) -> Self {
        Self {
            client,
            shown: None,
        }
    }

    /// `Detail` once a suggestion list has been shown in this session.
    pub fn mode(&self) -> ConversationMode {
        if self.shown.is_some() {
            ConversationMode::Detail
        } else {
            ConversationMode::Initial
        }
    }

    /// Most recently shown suggestions, empty before the first list.
    pub fn suggestions(&self) -> &[RecipeSuggestion] {
        self.shown.as_deref().unwrap_or_default()
    }

    pub async fn send(&mut self, input: &str) -> Result<Turn> {
        let mode = self.mode();
        self.send_as(mode, input).await
    }

    /// Sends `input` with an explicit mode instead of the session's own.
    pub async fn send_as(&mut self, mode: ConversationMode, input: &str) -> Result<Turn> {
        let input = input.trim();
        if input.is_empty() {
            bail!("Message cannot be empty");
        }

        info!(?mode, "Sending message");
        let prompt = Prompt::for_mode(mode, input);

        let reply = match self.client.call(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                let message = err.user_message();
                debug!(error = %err, ?message, "Turn failed");
                return Ok(Turn::Failure(message));
            }
        };

        let result = interpret(&reply, mode);
        if let InterpretedResult::Suggestions(suggestions) = &result {
            self.shown = Some(suggestions.clone());
        }
        Ok(Turn::Reply(result))
    }

    /// Asks for details of a shown suggestion by its 1-based position.
    pub async fn select(&mut self, position: usize) -> Result<Turn> {
        let count = self.suggestions().len();
        let name = match position
            .checked_sub(1)
            .and_then(|idx| self.suggestions().get(idx))
        {
            Some(suggestion) => suggestion.name.clone(),
            None if count == 0 => bail!("There are no suggestions to choose from yet"),
            None => bail!("Choose a suggestion between 1 and {count}"),
        };

        self.send_as(ConversationMode::Detail, &name).await
    }

    /// Forgets shown suggestions so the next message starts over.
    pub fn reset(&mut self) {
        self.shown = None;
    }
}
