use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(endpoint) = env_string("CHIEFAI_ENDPOINT")? {
        builder = builder.with_client(|client| client.endpoint = endpoint);
    }

    if let Some(timeout) = env_u64("CHIEFAI_TIMEOUT_SECS")? {
        builder = builder.with_client(|client| client.timeout_secs = timeout);
    }

    if let Some(max_retries) = env_u32("CHIEFAI_MAX_RETRIES")? {
        builder = builder.with_retry(|retry| retry.max_retries = max_retries);
    }

    if let Some(delay) = env_u64("CHIEFAI_RETRY_DELAY_MS")? {
        builder = builder.with_retry(|retry| retry.retry_delay_ms = delay);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => Ok(Some(val.trim().to_string())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
