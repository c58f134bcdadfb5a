//! # advisor-runtime
//!
//! Runtime LLM providers for the FounderX advisors.
//!
//! ## Providers
//!
//! - **Gemini** (default): Google generative-text REST API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use advisor_runtime::GeminiProvider;
//!
//! let provider = GeminiProvider::from_env()?;
//! let completion = provider.complete(&messages, &options).await?;
//! ```

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiProvider};

// Re-export core types for convenience
pub use advisor_core::{AiError, Completion, GenerationOptions, LlmProvider, Message, Result, Role};
