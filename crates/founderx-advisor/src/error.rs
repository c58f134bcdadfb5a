//! Error Types for the FounderX Advisors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// AI provider failure (status, malformed envelope, ...)
    #[error(transparent)]
    Ai(#[from] advisor_core::AiError),

    /// Quote provider signalled rate limiting (a `note` in the payload)
    #[error("Quote provider rate limited: {0}")]
    RateLimited(String),

    /// Quote response lacked an expected field
    #[error("Missing field in quote response: {0}")]
    MissingField(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Sector not in the lookup table
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    /// Trend seed was not valid JSON of the expected shape
    #[error("Malformed trend payload: {0}")]
    MalformedTrend(String),

    /// Trend labels and values differ in length
    #[error("Trend series shape mismatch: {labels} labels, {values} values")]
    TrendShape { labels: usize, values: usize },

    /// Trend series arrived with no points
    #[error("Trend series is empty")]
    EmptyTrend,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    /// Soft failures degrade to sentinel/partial data at the fetchers;
    /// everything else aborts the submission.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            AdvisorError::RateLimited(_) | AdvisorError::MissingField(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::Ai(e) => e.user_message(),
            AdvisorError::RateLimited(_) | AdvisorError::MissingField(_) => {
                "Market data is temporarily unavailable.".into()
            }
            AdvisorError::Network(_) => {
                "Could not reach the market data service. Please try again.".into()
            }
            AdvisorError::UnknownSector(sector) => {
                format!("'{}' is not a supported sector.", sector)
            }
            AdvisorError::MalformedTrend(msg) => {
                format!("Could not generate graph data from AI. {}", msg)
            }
            AdvisorError::TrendShape { .. } | AdvisorError::EmptyTrend => {
                "Could not generate graph data from AI.".into()
            }
            AdvisorError::Serialization(_) => "An unexpected error occurred.".into(),
        }
    }
}
