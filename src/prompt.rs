use std::fmt;

/// Whether the current turn expects a list of suggestions or detailed
/// instructions for one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationMode {
    Initial,
    Detail,
}

/// Text payload sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Asks for three recipe suggestions from a free-text ingredient list.
    pub fn initial(ingredients: &str) -> Self {
        Self(format!(
            "I have these ingredients: {ingredients}. Suggest 3 specific recipes I can make. \
             For each provide: 1. Creative recipe name 2. One-sentence description \
             3. Main ingredients used. Format each like: ## [Name]\n[Description] \
             Ingredients: [ingredients]"
        ))
    }

    /// Asks for full instructions for a single named recipe.
    pub fn detail(recipe_name: &str) -> Self {
        Self(format!(
            "Provide detailed instructions for: {recipe_name}. Include: \
             1. Ingredients list with quantities 2. Step-by-step instructions \
             3. Cooking time 4. Serving size. Format with markdown headers (### for sections)"
        ))
    }

    pub fn for_mode(mode: ConversationMode, input: &str) -> Self {
        match mode {
            ConversationMode::Initial => Self::initial(input),
            ConversationMode::Detail => Self::detail(input),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
