//! Application State

use std::sync::Arc;

use advisor_core::LlmProvider;
use founderx_advisor::{InvestmentAdvisor, StartupAdvisor};

/// Advisory services, present only when the server is fully configured
pub struct Services {
    /// LLM provider (Gemini)
    pub provider: Arc<dyn LlmProvider>,

    /// Investment recommendation pipeline
    pub investment: InvestmentAdvisor,

    /// Startup recommendation pipeline
    pub startup: StartupAdvisor,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// `None` while required API keys are missing; every advisory
    /// endpoint answers 503 in that state instead of attempting calls
    pub services: Option<Arc<Services>>,

    /// Human-readable description of what is missing, if anything
    pub config_error: Option<String>,
}

impl AppState {
    pub fn configured(services: Arc<Services>) -> Self {
        Self {
            services: Some(services),
            config_error: None,
        }
    }

    pub fn unconfigured(error: impl Into<String>) -> Self {
        Self {
            services: None,
            config_error: Some(error.into()),
        }
    }
}
