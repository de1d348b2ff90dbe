//! Anthropic-style messages API client.

use crate::{GenerateError, TextGenerator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default generation model.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Total attempts per prompt, including the first.
const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// HTTP generator for the messages API.
#[derive(Debug)]
pub struct AnthropicGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicGenerator {
    /// Create a generator with an explicit key and model.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a generator from the environment.
    ///
    /// Reads `AGENTRY_API_KEY` first, then `ANTHROPIC_API_KEY`; fails before
    /// any request when neither is set.
    pub fn from_env(model: Option<String>) -> Result<Self, GenerateError> {
        let api_key = std::env::var("AGENTRY_API_KEY")
            .or_else(|_| std::env::var("ANTHROPIC_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerateError::MissingApiKey)?;
        Ok(Self::new(
            api_key,
            model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        ))
    }

    /// Override the endpoint base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_OUTPUT_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response.json().await?;
        let text: String = body
            .content
            .iter()
            .map(|block| block.text.as_str())
            .collect();
        if text.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    /// Send the prompt, retrying transient failures with doubling backoff.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let mut backoff = INITIAL_BACKOFF;
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.send(prompt).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                    tracing::debug!(attempt, error = %err, "generation attempt failed; retrying");
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}
