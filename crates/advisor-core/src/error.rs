//! Error Types

use thiserror::Error;

/// Result type alias for AI provider operations
pub type Result<T> = std::result::Result<T, AiError>;

/// AI provider error types
#[derive(Error, Debug)]
pub enum AiError {
    /// The AI endpoint answered with a non-success HTTP status
    #[error("AI API error: status {status}")]
    Api { status: u16, message: String },

    /// Response envelope lacked the expected candidate/text field,
    /// or a JSON payload failed to parse
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    /// Rate limited by the provider
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Transport-level failure reaching the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration error (missing key, bad base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AiError {
    /// Soft errors degrade to sentinel/partial data; everything else
    /// aborts the current submission.
    pub fn is_soft(&self) -> bool {
        matches!(self, AiError::RateLimited(_))
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AiError::Api { status, .. } => {
                format!("AI API Error: Status {}", status)
            }
            AiError::MalformedResponse(msg) => {
                format!("The AI returned an unexpected response: {}", msg)
            }
            AiError::RateLimited(_) => {
                "Too many requests to the AI service. Please wait a moment.".into()
            }
            AiError::Network(_) => {
                "Could not reach the AI service. Please check your connection.".into()
            }
            AiError::Config(msg) => format!("Configuration error: {}", msg),
            AiError::Auth(_) => "Authentication failed. Please check your credentials.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let err = AiError::Api { status: 503, message: "overloaded".into() };
        assert_eq!(err.to_string(), "AI API error: status 503");
        assert_eq!(err.user_message(), "AI API Error: Status 503");
    }

    #[test]
    fn test_only_rate_limit_is_soft() {
        assert!(AiError::RateLimited("quota".into()).is_soft());
        assert!(!AiError::MalformedResponse("no candidates".into()).is_soft());
        assert!(!AiError::Api { status: 500, message: String::new() }.is_soft());
    }
}
