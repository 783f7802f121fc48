use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FormatError {
    #[error("invalid formatting pattern: {0}")]
    Pattern(#[from] regex::Error),
}

struct Rules {
    h3: Regex,
    h2: Regex,
    bold: Regex,
    italic: Regex,
}

impl Rules {
    // CRLF mode keeps `.` and `$` from treating `\r` as line content.
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            h3: Regex::new(r"(?mR)^### (.*)$")?,
            h2: Regex::new(r"(?mR)^## (.*)$")?,
            bold: Regex::new(r"(?R)\*\*(.*?)\*\*")?,
            italic: Regex::new(r"(?R)\*(.*?)\*")?,
        })
    }
}

static RULES: LazyLock<Result<Rules, regex::Error>> = LazyLock::new(Rules::compile);

/// Converts the markdown subset used in recipe instructions to HTML.
///
/// Rules run in a fixed order: `###` and `##` headings, `**bold**`,
/// `*italic*`, then every newline becomes `<br>`.
pub fn format_markdown(text: &str) -> Result<String, FormatError> {
    let rules = RULES.as_ref().map_err(|err| FormatError::Pattern(err.clone()))?;

    let html = rules.h3.replace_all(text, "<h3>${1}</h3>");
    let html = rules.h2.replace_all(&html, "<h2>${1}</h2>");
    let html = rules.bold.replace_all(&html, "<strong>${1}</strong>");
    let html = rules.italic.replace_all(&html, "<em>${1}</em>");

    Ok(html.replace('\n', "<br>"))
}
