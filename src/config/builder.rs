use anyhow::Result;

use super::types::{ClientSettings, Config, RetrySettings};
use super::validation::validate;

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) client: ClientSettings,
    pub(super) retry: RetrySettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            client: ClientSettings::default(),
            retry: RetrySettings::default(),
        }
    }

    pub fn with_client<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ClientSettings),
    {
        update(&mut self.client);
        self
    }

    pub fn with_retry<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut RetrySettings),
    {
        update(&mut self.retry);
        self
    }

    pub fn build(self) -> Result<Config> {
        let config = Config {
            client: self.client,
            retry: self.retry,
        };
        validate(&config)?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
