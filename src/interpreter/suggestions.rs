use serde::Serialize;

const HEADING_PREFIX: &str = "## ";
const INGREDIENTS_MARKER: &str = "Ingredients:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeSuggestion {
    pub name: String,
    pub description: String,
    pub ingredients: String,
}

impl RecipeSuggestion {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Splits a reply into suggestions, one per `## ` heading.
///
/// Text before the first heading is dropped. Under a heading, the first
/// non-blank line becomes the description and any line mentioning
/// `Ingredients:` sets the ingredients, with later lines overwriting
/// earlier ones.
pub fn parse_suggestions(text: &str) -> Vec<RecipeSuggestion> {
    let mut suggestions = Vec::new();
    let mut current: Option<RecipeSuggestion> = None;

    for line in text.split('\n') {
        if let Some(name) = line.strip_prefix(HEADING_PREFIX) {
            suggestions.extend(current.take());
            current = Some(RecipeSuggestion::named(name.trim()));
            continue;
        }

        let Some(suggestion) = current.as_mut() else {
            continue;
        };

        if let Some((_, ingredients)) = line.split_once(INGREDIENTS_MARKER) {
            suggestion.ingredients = ingredients.trim().to_string();
        } else if suggestion.description.is_empty() && !line.trim().is_empty() {
            suggestion.description = line.trim().to_string();
        }
    }

    suggestions.extend(current);
    suggestions
}
