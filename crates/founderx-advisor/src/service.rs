//! Advisory Services
//!
//! Orchestrators for the two pipelines. Each service owns an LLM provider
//! handle and drives one submission end to end; there is no cross-request
//! state.

use std::sync::Arc;

use advisor_core::{GenerationOptions, LlmProvider, Message};

use crate::error::Result;
use crate::market::MarketDataService;
use crate::model::{DomainRecommendation, RecommendationSet, UserProfile};
use crate::parser::parse_recommendations;
use crate::prompt::{investment_prompt, trend_prompt};
use crate::startup::{self, Sector};
use crate::trend::TrendSeries;

/// Sampling temperature for the investment recommendation call
pub const INVESTMENT_TEMPERATURE: f32 = 0.8;

/// Sampling temperature for the chart-seed call. Deliberately higher so
/// repeated submissions produce visibly different charts.
pub const TREND_TEMPERATURE: f32 = 0.9;

/// Investment recommendation pipeline:
/// market snapshot → prompt → completion → parsed recommendation cards.
pub struct InvestmentAdvisor {
    provider: Arc<dyn LlmProvider>,
    market: MarketDataService,
    model: String,
}

impl InvestmentAdvisor {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        market: MarketDataService,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            market,
            model: model.into(),
        }
    }

    /// Run one advisory submission.
    ///
    /// Market fetches degrade softly inside the snapshot; AI failures and
    /// stock-side network failures abort the submission.
    pub async fn advise(&self, profile: &UserProfile) -> Result<RecommendationSet> {
        tracing::info!(risk = %profile.risk, horizon = %profile.horizon, "fetching market data");
        let snapshot = self.market.snapshot().await?;

        tracing::info!("asking AI to analyze market data");
        let prompt = investment_prompt(profile, &snapshot);
        let messages = [Message::system(prompt.system), Message::user(prompt.user)];
        let options = GenerationOptions::with_temperature(self.model.clone(), INVESTMENT_TEMPERATURE);

        let completion = self.provider.complete(&messages, &options).await?;

        Ok(parse_recommendations(&completion.content))
    }
}

/// Startup recommendation pipeline: sector lookup plus AI-seeded trend.
pub struct StartupAdvisor {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl StartupAdvisor {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Domain recommendations for a sector (static lookup)
    pub fn recommend(&self, sector: Sector) -> Vec<DomainRecommendation> {
        startup::domain_recommendations(sector)
    }

    /// Ask the AI for the initial trend series for a domain.
    ///
    /// The response must be JSON (optionally fenced); malformed payloads
    /// surface to the caller rather than defaulting.
    pub async fn seed_trend(&self, domain: &str) -> Result<TrendSeries> {
        let messages = [Message::user(trend_prompt(domain))];
        let options = GenerationOptions::with_temperature(self.model.clone(), TREND_TEMPERATURE);

        let completion = self.provider.complete(&messages, &options).await?;

        TrendSeries::from_ai_json(&completion.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use crate::market::MockQuoteProvider;
    use crate::model::{Horizon, RiskTolerance};
    use advisor_core::{AiError, Completion};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Stub provider returning canned text and recording the last request
    struct StubProvider {
        response: String,
        last_request: Mutex<Option<(Vec<Message>, GenerationOptions)>>,
    }

    impl StubProvider {
        fn new(response: &str) -> Self {
            Self {
                response: response.into(),
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "Stub"
        }

        async fn health_check(&self) -> advisor_core::Result<bool> {
            Ok(true)
        }

        async fn complete(
            &self,
            messages: &[Message],
            options: &GenerationOptions,
        ) -> advisor_core::Result<Completion> {
            *self.last_request.lock().unwrap() = Some((messages.to_vec(), options.clone()));
            Ok(Completion {
                content: self.response.clone(),
                model: options.model.clone(),
            })
        }
    }

    fn profile() -> UserProfile {
        UserProfile::new(dec!(5000), Horizon::OneYear, RiskTolerance::Low)
    }

    #[tokio::test]
    async fn test_advise_parses_recommendations() {
        let provider = Arc::new(StubProvider::new(
            "**Stocks**\n* **AAPL:** Stable pick for low risk.\n**Cryptocurrency**\n* **BTC:** Core holding.",
        ));
        let market = MarketDataService::new(Arc::new(MockQuoteProvider::new()));
        let advisor = InvestmentAdvisor::new(provider.clone(), market, "test-model");

        let set = advisor.advise(&profile()).await.unwrap();
        assert_eq!(set.stocks.len(), 1);
        assert_eq!(set.crypto.len(), 1);

        let (messages, options) = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, INVESTMENT_TEMPERATURE);
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content.contains("Budget: $5000 USD"));
        assert!(messages[1].content.contains("Bitcoin: Price $97500.00"));
    }

    #[tokio::test]
    async fn test_advise_with_unhelpful_text_yields_empty_set() {
        let provider = Arc::new(StubProvider::new("I cannot help with that."));
        let market = MarketDataService::new(Arc::new(MockQuoteProvider::new()));
        let advisor = InvestmentAdvisor::new(provider, market, "test-model");

        let set = advisor.advise(&profile()).await.unwrap();
        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_seed_trend_uses_higher_temperature() {
        let provider = Arc::new(StubProvider::new(
            "```json\n{\"labels\": [\"Jan\", \"Feb\"], \"values\": [20.0, 35.0]}\n```",
        ));
        let advisor = StartupAdvisor::new(provider.clone(), "test-model");

        let series = advisor.seed_trend("Telemedicine").await.unwrap();
        assert_eq!(series.len(), 2);

        let (messages, options) = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(options.temperature, TREND_TEMPERATURE);
        assert!(messages[0].content.contains("\"Telemedicine\" startup"));
    }

    #[tokio::test]
    async fn test_seed_trend_surfaces_malformed_json() {
        let provider = Arc::new(StubProvider::new("not json"));
        let advisor = StartupAdvisor::new(provider, "test-model");

        let err = advisor.seed_trend("DeFi Lending").await.unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedTrend(_)));
    }

    #[tokio::test]
    async fn test_ai_failure_aborts_submission() {
        struct FailingProvider;

        #[async_trait]
        impl LlmProvider for FailingProvider {
            fn name(&self) -> &str {
                "Failing"
            }
            async fn health_check(&self) -> advisor_core::Result<bool> {
                Ok(false)
            }
            async fn complete(
                &self,
                _messages: &[Message],
                _options: &GenerationOptions,
            ) -> advisor_core::Result<Completion> {
                Err(AiError::Api {
                    status: 500,
                    message: "boom".into(),
                })
            }
        }

        let market = MarketDataService::new(Arc::new(MockQuoteProvider::new()));
        let advisor = InvestmentAdvisor::new(Arc::new(FailingProvider), market, "test-model");

        let err = advisor.advise(&profile()).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Ai(AiError::Api { status: 500, .. })));
    }
}
