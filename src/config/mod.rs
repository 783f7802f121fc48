//! Configuration management for the chiefai recipe assistant.
//!
//! Settings are layered in this order, later layers winning:
//! - Built-in defaults
//! - The JSON config file at `~/.chiefai/config`
//! - Environment variable overrides
//! - Command-line flags (applied by the CLI before validation)

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{ClientSettings, Config};

#[allow(unused_imports)]
pub use constants::{DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS};
