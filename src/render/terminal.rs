use std::sync::LazyLock;

use colored::Colorize;
use regex::{Captures, Regex};

use crate::interpreter::{InterpretedResult, RecipeSuggestion};
use crate::session::Turn;

use super::Renderer;

static EMPHASIS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"<(strong|em)>(.*?)</(?:strong|em)>").ok());

/// Styles turns for an ANSI terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&self, turn: &Turn) -> String {
        match turn {
            Turn::Reply(InterpretedResult::Suggestions(list)) => suggestions_text(list),
            Turn::Reply(InterpretedResult::FormattedText(html)) => formatted_text(html),
            Turn::Reply(InterpretedResult::RawText(text)) => text.clone(),
            Turn::Failure(message) => message.text().red().to_string(),
        }
    }
}

fn suggestions_text(suggestions: &[RecipeSuggestion]) -> String {
    let mut out = String::from("Here are some recipes you could make:\n");
    for (idx, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}\n", idx + 1, suggestion.name.bold()));
        if !suggestion.description.is_empty() {
            out.push_str(&format!("     {}\n", suggestion.description));
        }
        if !suggestion.ingredients.is_empty() {
            let ingredients = format!("Ingredients: {}", suggestion.ingredients);
            out.push_str(&format!("     {}\n", ingredients.dimmed()));
        }
    }
    out.push_str("\nPick a recipe by number or name for full instructions.");
    out
}

/// Turns the HTML produced for detailed instructions back into styled lines.
fn formatted_text(html: &str) -> String {
    html.split("<br>")
        .map(styled_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn styled_line(line: &str) -> String {
    let line = line.trim_end_matches('\r');
    if let Some(title) = strip_tag(line, "h3") {
        return emphasis(title).bold().underline().to_string();
    }
    if let Some(title) = strip_tag(line, "h2") {
        return emphasis(title).bold().to_string();
    }
    emphasis(line)
}

fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.strip_prefix(&format!("<{tag}>"))?
        .strip_suffix(&format!("</{tag}>"))
}

fn emphasis(line: &str) -> String {
    let Some(pattern) = EMPHASIS.as_ref() else {
        return line.to_string();
    };

    pattern
        .replace_all(line, |caps: &Captures| {
            let inner = &caps[2];
            if &caps[1] == "strong" {
                inner.bold().to_string()
            } else {
                inner.italic().to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::UserMessage;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn numbers_suggestions() {
        plain();
        let turn = Turn::Reply(InterpretedResult::Suggestions(vec![
            RecipeSuggestion {
                name: "Tomato Pasta".into(),
                description: "A quick classic.".into(),
                ingredients: "tomato, pasta".into(),
            },
            RecipeSuggestion {
                name: "Plain Rice".into(),
                ..RecipeSuggestion::default()
            },
        ]));

        let text = TerminalRenderer.render(&turn);

        assert!(text.contains("  1. Tomato Pasta\n     A quick classic.\n     Ingredients: tomato, pasta\n"));
        assert!(text.contains("  2. Plain Rice\n"));
        assert!(!text.contains("Ingredients: \n"));
    }

    #[test]
    fn converts_formatted_html_to_lines() {
        plain();
        let turn = Turn::Reply(InterpretedResult::FormattedText(
            "<h3>Ingredients</h3><br><strong>2 cups</strong> flour<br><em>optional</em> sugar"
                .into(),
        ));

        assert_eq!(
            TerminalRenderer.render(&turn),
            "Ingredients\n2 cups flour\noptional sugar"
        );
    }

    #[test]
    fn strips_carriage_returns_before_headings() {
        plain();
        assert_eq!(formatted_text("<h2>Dinner</h2>\r<br>Serve"), "Dinner\nServe");
    }

    #[test]
    fn raw_text_is_unchanged() {
        plain();
        let turn = Turn::Reply(InterpretedResult::RawText("**just text**".into()));
        assert_eq!(TerminalRenderer.render(&turn), "**just text**");
    }

    #[test]
    fn failures_show_user_message() {
        plain();
        assert_eq!(
            TerminalRenderer.render(&Turn::Failure(UserMessage::ServerUnavailable)),
            "Server is temporarily unavailable. Please try again later."
        );
    }
}
