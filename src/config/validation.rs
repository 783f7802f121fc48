use anyhow::{Result, bail};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    let endpoint = config.client.endpoint.trim();
    if endpoint.is_empty() {
        bail!("Completion endpoint cannot be empty. Set CHIEFAI_ENDPOINT or pass --endpoint");
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!("Completion endpoint must be an http(s) URL, got '{endpoint}'");
    }
    if config.client.timeout_secs == 0 {
        bail!("Timeout must be greater than zero seconds");
    }
    Ok(())
}
