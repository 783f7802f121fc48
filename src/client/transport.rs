use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::debug;

use crate::config::ClientSettings;
use crate::prompt::Prompt;

use super::error::AIError;

/// Raw text returned by the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AIReply(String);

impl AIReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AIReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single attempt at turning a prompt into a reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, prompt: &Prompt) -> Result<AIReply, AIError>;
}

#[derive(Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let endpoint = settings.endpoint.trim().to_string();
        if endpoint.is_empty() {
            return Err(anyhow!("Completion endpoint cannot be empty"));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, prompt: &Prompt) -> Result<AIReply, AIError> {
        debug!(endpoint = %self.endpoint, prompt = %prompt, "Sending completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&PromptRequest {
                prompt: prompt.as_str(),
            })
            .send()
            .await
            .map_err(|err| AIError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AIError::Network(err.to_string()))?;

        debug!(status = status.as_u16(), body = %body, "Received completion response");

        if !status.is_success() {
            return Err(AIError::from_error_body(status.as_u16(), &body));
        }

        parse_reply(&body)
    }
}

/// Extracts the `reply` field from a success body.
pub(super) fn parse_reply(body: &str) -> Result<AIReply, AIError> {
    let payload: serde_json::Value = serde_json::from_str(body)
        .map_err(|err| AIError::MalformedResponse(err.to_string()))?;

    match payload.get("reply") {
        None | Some(serde_json::Value::Null) => Err(AIError::EmptyReply),
        Some(serde_json::Value::String(text)) if text.is_empty() => Err(AIError::EmptyReply),
        Some(serde_json::Value::String(text)) => Ok(AIReply::new(text.as_str())),
        Some(other) => Err(AIError::MalformedResponse(format!(
            "expected `reply` to be a string, got {other}"
        ))),
    }
}
