//! Market Data Fetchers
//!
//! Abstractions and implementations for the read-only quote provider that
//! feeds the investment prompt. Two flows, both single-attempt:
//!
//! - top equity gainers, flattened to one summary string
//! - spot exchange rates for a fixed crypto symbol list, one independent
//!   fetch per symbol, failures skipped
//!
//! Rate limiting is signalled in-band (a `note` field) and degrades to a
//! fixed sentinel string instead of failing the caller.

mod alphavantage;
mod mock;

pub use alphavantage::AlphaVantageClient;
pub use mock::MockQuoteProvider;

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::MarketSnapshot;

/// Crypto symbols queried for the investment prompt, in output order
pub const MAJOR_CRYPTOS: [&str; 4] = ["BTC", "ETH", "SOL", "DOGE"];

/// How many top gainers make it into the summary
pub const TOP_GAINERS_LIMIT: usize = 10;

/// Sentinel substituted when the stock fetch is rate limited or malformed
pub const STOCK_UNAVAILABLE: &str = "Stock data not available (API limit may be reached).";

/// Sentinel substituted when no crypto symbol could be fetched
pub const CRYPTO_UNAVAILABLE: &str = "Crypto data not available (API limit may be reached).";

/// A single top-gainer quote.
///
/// Price and change are kept as the provider's display strings; they are
/// embedded into prompt text, never computed with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainerQuote {
    pub ticker: String,
    pub price: String,
    pub change_percentage: String,
}

/// A spot exchange rate for one crypto symbol
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CryptoRate {
    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// Full currency name (e.g., "Bitcoin")
    pub name: String,

    /// USD rate
    pub price_usd: Decimal,
}

/// Quote provider trait (Strategy pattern)
///
/// Implement this for each quote backend: Alpha Vantage, a cache, a mock.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the current top equity gainers
    async fn top_gainers(&self) -> Result<Vec<GainerQuote>>;

    /// Fetch the USD spot rate for one crypto symbol
    async fn exchange_rate(&self, symbol: &str) -> Result<CryptoRate>;

    /// Provider name
    fn name(&self) -> &str;
}

/// Builds the flattened market summaries the prompt embeds
#[derive(Clone)]
pub struct MarketDataService {
    provider: Arc<dyn QuoteProvider>,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Top-gainers summary string.
    ///
    /// Soft failures (rate limit, missing field) yield the fixed sentinel;
    /// transport failures propagate and abort the submission.
    pub async fn stock_summary(&self) -> Result<String> {
        match self.provider.top_gainers().await {
            Ok(gainers) => Ok(gainers
                .iter()
                .take(TOP_GAINERS_LIMIT)
                .map(|g| {
                    format!(
                        "Ticker: {}, Price: {}, Change: {}",
                        g.ticker, g.price, g.change_percentage
                    )
                })
                .collect::<Vec<_>>()
                .join("; ")),
            Err(e) if e.is_soft() => {
                tracing::warn!("stock quote unavailable: {}", e);
                Ok(STOCK_UNAVAILABLE.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Crypto rates summary string.
    ///
    /// Symbols are queried in [`MAJOR_CRYPTOS`] order, one attempt each; a
    /// failed symbol is logged and skipped, so partial results are expected.
    /// If every symbol fails the crypto sentinel is returned.
    pub async fn crypto_summary(&self) -> String {
        let mut parts = Vec::new();

        for symbol in MAJOR_CRYPTOS {
            match self.provider.exchange_rate(symbol).await {
                Ok(rate) => {
                    parts.push(format!(
                        "{}: Price ${:.2}",
                        rate.name,
                        rate.price_usd.round_dp(2)
                    ));
                }
                Err(e) => {
                    tracing::warn!("crypto quote failed for {}: {}", symbol, e);
                }
            }
        }

        if parts.is_empty() {
            CRYPTO_UNAVAILABLE.into()
        } else {
            parts.join("; ")
        }
    }

    /// Fetch stocks then crypto sequentially and freeze the snapshot
    pub async fn snapshot(&self) -> Result<MarketSnapshot> {
        let stock_summary = self.stock_summary().await?;
        let crypto_summary = self.crypto_summary().await;

        Ok(MarketSnapshot {
            stock_summary,
            crypto_summary,
        })
    }
}
