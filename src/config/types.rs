use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client: ClientSettings,
    pub retry: RetrySettings,
}

/// Where and how the completion service is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySettings {
    /// Attempts made after the first one fails.
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl RetrySettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

// File configuration types
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub client: Option<FileClientSettings>,
    #[serde(default)]
    pub retry: Option<FileRetrySettings>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileClientSettings {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileRetrySettings {
    pub max_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
}
