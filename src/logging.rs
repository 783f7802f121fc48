use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag. Output goes to stderr so stdout only carries the chat.
pub fn init(verbose: bool) {
    let fallback = if verbose { "chiefai=debug" } else { "chiefai=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
