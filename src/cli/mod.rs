mod args;
mod chat;
mod commands;

pub use args::Cli;
