//! Presentation of finished turns.

mod html;
mod terminal;

pub use html::{HtmlRenderer, Sender, message_html};
pub use terminal::TerminalRenderer;

use crate::session::Turn;

pub trait Renderer {
    fn render(&self, turn: &Turn) -> String;
}
