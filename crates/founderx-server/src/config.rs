//! Server Configuration
//!
//! All API keys and endpoints are environment-supplied. Missing required
//! keys do not crash the process: the server starts in a
//! configuration-error state and refuses advisory calls until the keys
//! are provided.

use thiserror::Error;

use advisor_core::provider::DEFAULT_MODEL;

/// Required environment variables
const REQUIRED_KEYS: [&str; 2] = ["GEMINI_API_KEY", "ALPHA_VANTAGE_API_KEY"];

/// Every required variable that was absent at startup
#[derive(Debug, Error)]
#[error("missing required environment variables: {}", missing.join(", "))]
pub struct MissingConfig {
    pub missing: Vec<String>,
}

/// Resolved server configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: String,
    pub alpha_vantage_api_key: String,
    pub model: String,
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment, collecting *all* missing
    /// required keys so the error names everything at once.
    pub fn from_env() -> Result<Self, MissingConfig> {
        let mut missing = Vec::new();
        let mut values = Vec::new();

        for key in REQUIRED_KEYS {
            match std::env::var(key) {
                Ok(value) if !value.is_empty() => values.push(value),
                _ => missing.push(key.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(MissingConfig { missing });
        }

        let mut values = values.into_iter();
        Ok(Self {
            gemini_api_key: values.next().unwrap_or_default(),
            alpha_vantage_api_key: values.next().unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_names_all_keys() {
        let err = MissingConfig {
            missing: vec!["GEMINI_API_KEY".into(), "ALPHA_VANTAGE_API_KEY".into()],
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variables: GEMINI_API_KEY, ALPHA_VANTAGE_API_KEY"
        );
    }
}
