use std::time::Duration;

use anyhow::Result;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::prompt::Prompt;

use super::error::AIError;
use super::transport::{AIReply, HttpTransport, Transport};

/// How many times a failed call is repeated and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Total number of attempts a call may make.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

#[derive(Debug, Clone)]
pub struct AIClient<T = HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl AIClient<HttpTransport> {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.client)?;
        let policy = RetryPolicy::new(config.retry.max_retries, config.retry.delay());
        Ok(Self::with_transport(transport, policy))
    }
}

impl<T: Transport> AIClient<T> {
    pub fn with_transport(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Sends `prompt`, retrying every kind of failure until the policy's
    /// budget is spent. The last error is returned once retries run out.
    pub async fn call(&self, prompt: &Prompt) -> Result<AIReply, AIError> {
        let mut attempt: u32 = 1;
        let mut retries_left = self.policy.max_retries;

        loop {
            match self.transport.send(prompt).await {
                Ok(reply) => {
                    debug!(attempt, "Completion request succeeded");
                    return Ok(reply);
                }
                Err(err) if retries_left > 0 => {
                    warn!(
                        attempt,
                        max_attempts = self.policy.max_attempts(),
                        retries_left,
                        error = %err,
                        "Retrying completion request"
                    );
                    tokio::time::sleep(self.policy.delay).await;
                    retries_left -= 1;
                    attempt += 1;
                }
                Err(err) => {
                    error!(attempt, error = %err, "Completion request failed");
                    return Err(err);
                }
            }
        }
    }
}
