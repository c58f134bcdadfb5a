//! LLM Provider Strategy Pattern
//!
//! Defines a common interface for generative-text backends so the advisory
//! services never talk to a concrete API directly.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_core::{LlmProvider, GenerationOptions, Message};
//!
//! let provider = GeminiProvider::from_env()?;
//! let completion = provider
//!     .complete(&[Message::user("...")], &GenerationOptions::default())
//!     .await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::Message;

/// Default model identifier used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Configuration for LLM generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier (e.g., "gemini-1.5-flash-latest")
    pub model: String,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate, if the provider supports a cap
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: default_temperature(),
            max_output_tokens: None,
        }
    }
}

impl GenerationOptions {
    /// Options for a given model at a given temperature
    pub fn with_temperature(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_output_tokens: None,
        }
    }
}

/// Response from an LLM completion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Completion {
    /// The generated text (first candidate)
    pub content: String,

    /// Model that generated this response
    pub model: String,
}

/// Strategy trait for LLM providers
///
/// Implement this trait to add support for new text-generation backends.
/// The advisory services work exclusively through this interface.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., "Gemini")
    fn name(&self) -> &str;

    /// Check if the provider is reachable and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Generate a completion from messages
    ///
    /// A single request per call: no retries, no backoff (the caller owns
    /// any degradation policy).
    async fn complete(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Completion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.temperature, 0.7);
        assert_eq!(opts.model, DEFAULT_MODEL);
        assert!(opts.max_output_tokens.is_none());
    }

    #[test]
    fn test_with_temperature() {
        let opts = GenerationOptions::with_temperature(DEFAULT_MODEL, 0.9);
        assert_eq!(opts.temperature, 0.9);
    }
}
