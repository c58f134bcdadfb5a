//! # founderx-advisor
//!
//! Advisory pipelines behind the FounderX dashboard: a startup-domain
//! recommender and an investment recommender, both built on a
//! generative-text provider and a market-quote provider.
//!
//! ## Pipelines
//!
//! ```text
//! Investment:
//!   profile ──► market snapshot ──► prompt ──► LLM ──► parser ──► cards
//!              (sequential, soft-degrading)          (section scan)
//!
//! Startup:
//!   sector ──► static domain table ──► trend prompt ──► LLM ──► JSON seed
//!                                                        │
//!                                          TrendSimulator ┴─► windowed
//!                                          (owned task, 2.5s ticks)
//! ```
//!
//! The AI output format is a contract the prompt dictates and the parser
//! depends on; the parser is deliberately a pure function over text with
//! explicit patterns, since the provider is not contractually bound to
//! honor the format.

pub mod analytics;
pub mod error;
pub mod market;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod service;
pub mod startup;
pub mod trend;

pub use analytics::{analyze, AnalyticsReport, BusinessMetrics};
pub use error::{AdvisorError, Result};
pub use market::{AlphaVantageClient, MarketDataService, MockQuoteProvider, QuoteProvider};
pub use model::{
    DomainRecommendation, Horizon, MarketSnapshot, RecommendationRecord, RecommendationSet,
    RiskTolerance, UserProfile,
};
pub use parser::parse_recommendations;
pub use service::{InvestmentAdvisor, StartupAdvisor};
pub use startup::Sector;
pub use trend::{TrendSeries, TrendSimulator};
