//! # advisor-core
//!
//! Provider-agnostic LLM abstraction shared by the FounderX advisory tools.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Advisory services                       │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────┐   │
//! │  │   Prompt     │  │   Response   │  │  LlmProvider  │   │
//! │  │   Builder    │──│   Parser     │──│  (Strategy)   │   │
//! │  └──────────────┘  └──────────────┘  └───────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The `LlmProvider` trait keeps the services independent of the concrete
//! generative-text backend (Gemini today, anything else tomorrow).

pub mod error;
pub mod message;
pub mod provider;

pub use error::{AiError, Result};
pub use message::{Message, Role};
pub use provider::{Completion, GenerationOptions, LlmProvider};
