mod cli;
mod client;
mod config;
mod interpreter;
mod logging;
mod prompt;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    cli.run().await
}
