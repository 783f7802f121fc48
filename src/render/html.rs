use crate::interpreter::{InterpretedResult, RecipeSuggestion};
use crate::session::Turn;

use super::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    fn class(self) -> &'static str {
        match self {
            Sender::User => "message-user",
            Sender::Ai => "message-ai",
        }
    }

    fn avatar(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Ai => "AI",
        }
    }
}

/// Wraps already-rendered content in a chat message bubble.
pub fn message_html(sender: Sender, content: &str) -> String {
    format!(
        "<div class=\"message {}\">\n    <div class=\"message-avatar\">{}</div>\n    <div class=\"message-content\">{}</div>\n</div>",
        sender.class(),
        sender.avatar(),
        content
    )
}

fn suggestions_html(suggestions: &[RecipeSuggestion]) -> String {
    let cards: String = suggestions
        .iter()
        .map(|suggestion| {
            format!(
                "<div class=\"recipe-suggestion\"><h3>{}</h3><p>{}</p><div class=\"ingredients\">{}</div></div>",
                suggestion.name, suggestion.description, suggestion.ingredients
            )
        })
        .collect();
    format!("<div class=\"recipe-suggestions\">{cards}</div>")
}

/// Emits the chat widget's markup. Content is inserted as-is: formatted
/// replies are already HTML.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, turn: &Turn) -> String {
        let content = match turn {
            Turn::Reply(InterpretedResult::Suggestions(list)) => suggestions_html(list),
            Turn::Reply(InterpretedResult::FormattedText(html)) => html.clone(),
            Turn::Reply(InterpretedResult::RawText(text)) => text.clone(),
            Turn::Failure(message) => message.text().to_string(),
        };
        message_html(Sender::Ai, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::UserMessage;

    #[test]
    fn wraps_user_and_ai_messages() {
        let html = message_html(Sender::User, "eggs, rice");
        assert!(html.starts_with("<div class=\"message message-user\">"));
        assert!(html.contains("<div class=\"message-avatar\">You</div>"));
        assert!(html.contains("<div class=\"message-content\">eggs, rice</div>"));

        let html = message_html(Sender::Ai, "hi");
        assert!(html.contains("message message-ai"));
        assert!(html.contains("<div class=\"message-avatar\">AI</div>"));
    }

    #[test]
    fn renders_suggestion_cards() {
        let turn = Turn::Reply(InterpretedResult::Suggestions(vec![RecipeSuggestion {
            name: "Tomato Pasta".into(),
            description: "A quick classic.".into(),
            ingredients: "tomato, pasta".into(),
        }]));

        let html = HtmlRenderer.render(&turn);

        assert!(html.contains(
            "<div class=\"recipe-suggestions\"><div class=\"recipe-suggestion\"><h3>Tomato Pasta</h3><p>A quick classic.</p><div class=\"ingredients\">tomato, pasta</div></div></div>"
        ));
        assert!(html.contains("message-ai"));
    }

    #[test]
    fn renders_failures_as_ai_messages() {
        let html = HtmlRenderer.render(&Turn::Failure(UserMessage::RateLimited));
        assert!(html.contains(
            "<div class=\"message-content\">Too many requests. Please wait a moment before trying again.</div>"
        ));
    }

    #[test]
    fn keeps_formatted_html_intact() {
        let turn = Turn::Reply(InterpretedResult::FormattedText("<h3>Steps</h3><br>Stir".into()));
        assert!(
            HtmlRenderer
                .render(&turn)
                .contains("<div class=\"message-content\"><h3>Steps</h3><br>Stir</div>")
        );
    }
}
