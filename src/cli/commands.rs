use anyhow::{Result, anyhow};

use crate::client::AIClient;
use crate::config::Config;
use crate::prompt::ConversationMode;
use crate::render::{HtmlRenderer, Renderer, Sender, TerminalRenderer, message_html};
use crate::session::{ChatSession, Turn};

use super::args::{Cli, Command};
use super::chat;

pub(crate) async fn run(cli: Cli, config: Config) -> Result<()> {
    let renderer: Box<dyn Renderer> = if cli.html {
        Box::new(HtmlRenderer)
    } else {
        Box::new(TerminalRenderer)
    };
    let session = ChatSession::new(AIClient::new(&config)?);

    match cli.command {
        None | Some(Command::Chat) => chat::run_repl(session, renderer.as_ref(), cli.html).await,
        Some(Command::Suggest(args)) => {
            let input = args.ingredients.join(" ");
            one_shot(session, renderer.as_ref(), cli.html, ConversationMode::Initial, &input).await
        }
        Some(Command::Detail(args)) => {
            let input = args.recipe.join(" ");
            one_shot(session, renderer.as_ref(), cli.html, ConversationMode::Detail, &input).await
        }
    }
}

async fn one_shot(
    mut session: ChatSession,
    renderer: &dyn Renderer,
    html: bool,
    mode: ConversationMode,
    input: &str,
) -> Result<()> {
    let turn = session.send_as(mode, input).await?;

    if let Turn::Failure(message) = turn {
        return Err(anyhow!(message.text()));
    }

    if html {
        println!("{}", message_html(Sender::User, input.trim()));
    }
    println!("{}", renderer.render(&turn));
    Ok(())
}
