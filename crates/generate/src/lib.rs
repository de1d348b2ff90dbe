//! Text generation for configuration content.
//!
//! The rest of the workspace treats generation as an opaque
//! `generate(prompt) -> text` call behind [`TextGenerator`]; this crate
//! provides the Anthropic-style HTTP implementation with bounded retry, plus
//! helpers for extracting markdown from model output.

mod extract;
mod http;

pub use extract::extract_markdown;
pub use http::{AnthropicGenerator, DEFAULT_MODEL};

use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a generator.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// No API key was configured.
    #[error("no API key configured (set AGENTRY_API_KEY or ANTHROPIC_API_KEY)")]
    MissingApiKey,

    /// Transport-level failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered successfully but produced no text.
    #[error("generation returned no text content")]
    EmptyResponse,
}

impl GenerateError {
    /// Whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::MissingApiKey | Self::EmptyResponse => false,
        }
    }
}

/// An opaque prompt-to-text generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
