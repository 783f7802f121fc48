use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

use crate::render::{Renderer, Sender, message_html};
use crate::session::ChatSession;

const WELCOME: &str = "Tell me what ingredients you have and I'll suggest some recipes.";
const HELP: &str = "Type a number to pick a suggestion, /new to start over, /quit to exit.";

enum Input<'a> {
    Quit,
    Reset,
    Pick(usize),
    Message(&'a str),
}

fn parse_input(line: &str, has_suggestions: bool) -> Option<Input<'_>> {
    let line = line.trim();
    match line {
        "" => None,
        "/quit" | "/exit" => Some(Input::Quit),
        "/new" => Some(Input::Reset),
        _ => match line.parse::<usize>() {
            Ok(position) if has_suggestions => Some(Input::Pick(position)),
            _ => Some(Input::Message(line)),
        },
    }
}

pub(crate) async fn run_repl(
    mut session: ChatSession,
    renderer: &dyn Renderer,
    html: bool,
) -> Result<()> {
    println!("{}", "👨‍🍳 Chief AI".bold());
    println!("{WELCOME}");
    println!("{}", HELP.dimmed());

    loop {
        print!("\n{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let Some(input) = parse_input(&line, !session.suggestions().is_empty()) else {
            continue;
        };

        let outcome = match input {
            Input::Quit => break,
            Input::Reset => {
                session.reset();
                println!("{}", WELCOME);
                continue;
            }
            Input::Pick(position) => session.select(position).await,
            Input::Message(text) => {
                if html {
                    println!("{}", message_html(Sender::User, text));
                }
                eprintln!("{}", "Thinking...".dimmed());
                session.send(text).await
            }
        };

        match outcome {
            Ok(turn) => {
                debug!(mode = ?session.mode(), "Turn finished");
                println!("\n{}", renderer.render(&turn));
            }
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }

    Ok(())
}
