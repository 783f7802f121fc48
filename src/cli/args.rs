use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;

use super::commands;

/// Entry point for the `chiefai` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "chiefai",
    about = "Turn the ingredients you have into recipe ideas",
    version,
    long_about = None
)]
pub struct Cli {
    /// Optional subcommand (defaults to `chat`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging of requests and responses
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Override the completion endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Number of retries after a failed request
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Print chat widget HTML instead of styled terminal text
    #[arg(long, global = true)]
    pub html: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive conversation: list ingredients, then pick a recipe.
    Chat,
    /// Ask once for recipe suggestions.
    Suggest(SuggestArgs),
    /// Ask once for detailed instructions for a recipe.
    Detail(DetailArgs),
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Ingredients you have on hand.
    #[arg(required = true)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Name of the recipe.
    #[arg(required = true)]
    pub recipe: Vec<String>,
}

impl Cli {
    /// Loads file and environment settings, then applies flag overrides.
    pub fn config(&self) -> Result<Config> {
        let mut builder = Config::load_builder()?;

        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_client(|client| client.endpoint = endpoint.trim().to_string());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.with_client(|client| client.timeout_secs = timeout);
        }
        if let Some(retries) = self.retries {
            builder = builder.with_retry(|retry| retry.max_retries = retries);
        }

        builder.build()
    }

    pub async fn run(self) -> Result<()> {
        let config = self.config()?;
        commands::run(self, config).await
    }
}
