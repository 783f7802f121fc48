use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path, path::PathBuf};

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::FileConfig;

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".chiefai/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Layers the config file and environment over the defaults.
    ///
    /// The returned builder is not yet validated so callers can apply
    /// command-line overrides before calling `build`.
    pub fn load_builder() -> Result<ConfigBuilder> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        apply_env_overrides(builder)
    }

    pub fn load() -> Result<Self> {
        Self::load_builder()?.build()
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(file.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        let builder = match self.client {
            Some(client) => builder.with_client(|settings| {
                if let Some(endpoint) = client.endpoint {
                    settings.endpoint = endpoint;
                }
                if let Some(timeout) = client.timeout_secs {
                    settings.timeout_secs = timeout;
                }
                if let Some(user_agent) = client.user_agent {
                    settings.user_agent = user_agent;
                }
            }),
            None => builder,
        };

        match self.retry {
            Some(retry) => builder.with_retry(|settings| {
                if let Some(max_retries) = retry.max_retries {
                    settings.max_retries = max_retries;
                }
                if let Some(delay) = retry.retry_delay_ms {
                    settings.retry_delay_ms = delay;
                }
            }),
            None => builder,
        }
    }
}
