//! Alpha Vantage Quote Client
//!
//! Read-only, key-authenticated client for the two endpoints the
//! investment flow needs: `TOP_GAINERS_LOSERS` and
//! `CURRENCY_EXCHANGE_RATE`. The provider signals rate limiting by
//! replacing the payload with a `note` field; that and any missing
//! expected field are soft failures the caller degrades on.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{CryptoRate, GainerQuote, QuoteProvider};
use crate::error::{AdvisorError, Result};

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Alpha Vantage client
pub struct AlphaVantageClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageClient {
    /// Single-attempt client: no retries, no backoff, no request timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
        }
    }

    /// Override the base URL (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn gainers_url(&self) -> String {
        format!(
            "{}/query?function=TOP_GAINERS_LOSERS&apikey={}",
            self.base_url, self.api_key
        )
    }

    fn exchange_rate_url(&self, symbol: &str) -> String {
        format!(
            "{}/query?function=CURRENCY_EXCHANGE_RATE&from_currency={}&to_currency=USD&apikey={}",
            self.base_url, symbol, self.api_key
        )
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn top_gainers(&self) -> Result<Vec<GainerQuote>> {
        let response: TopGainersResponse = self
            .client
            .get(self.gainers_url())
            .send()
            .await?
            .json()
            .await?;

        if let Some(note) = response.note {
            return Err(AdvisorError::RateLimited(note));
        }

        response
            .top_gainers
            .ok_or_else(|| AdvisorError::MissingField("top_gainers".into()))
    }

    async fn exchange_rate(&self, symbol: &str) -> Result<CryptoRate> {
        let response: ExchangeRateResponse = self
            .client
            .get(self.exchange_rate_url(symbol))
            .send()
            .await?
            .json()
            .await?;

        if let Some(note) = response.note {
            return Err(AdvisorError::RateLimited(note));
        }

        let rate = response
            .rate
            .ok_or_else(|| AdvisorError::MissingField("Realtime Currency Exchange Rate".into()))?;

        let price_usd: Decimal = rate
            .exchange_rate
            .parse()
            .map_err(|_| AdvisorError::MissingField("5. Exchange Rate".into()))?;

        Ok(CryptoRate {
            symbol: symbol.to_uppercase(),
            name: rate.from_currency_name,
            price_usd,
        })
    }

    fn name(&self) -> &str {
        "AlphaVantage"
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct TopGainersResponse {
    #[serde(default)]
    top_gainers: Option<Vec<GainerQuote>>,

    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    #[serde(rename = "Realtime Currency Exchange Rate", default)]
    rate: Option<RealtimeRate>,

    #[serde(default)]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RealtimeRate {
    #[serde(rename = "2. From_Currency Name")]
    from_currency_name: String,

    #[serde(rename = "5. Exchange Rate")]
    exchange_rate: String,
}
