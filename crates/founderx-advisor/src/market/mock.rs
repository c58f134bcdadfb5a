//! Mock Quote Provider
//!
//! For testing and demo purposes. Returns realistic static quotes with
//! injectable rate-limit and per-symbol failure behavior.

use std::collections::HashSet;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{CryptoRate, GainerQuote, QuoteProvider};
use crate::error::{AdvisorError, Result};

/// Mock quote provider with static data
pub struct MockQuoteProvider {
    gainers: Vec<GainerQuote>,
    rate_limited: bool,
    fail_symbols: HashSet<String>,
}

impl Default for MockQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockQuoteProvider {
    pub fn new() -> Self {
        Self {
            gainers: default_gainers(),
            rate_limited: false,
            fail_symbols: HashSet::new(),
        }
    }

    /// Replace the static gainers list
    pub fn with_gainers(mut self, gainers: Vec<GainerQuote>) -> Self {
        self.gainers = gainers;
        self
    }

    /// Make every call answer with an in-band rate-limit note
    pub fn rate_limited(mut self) -> Self {
        self.rate_limited = true;
        self
    }

    /// Make the given symbols fail their exchange-rate fetch
    pub fn failing_symbols(mut self, symbols: &[&str]) -> Self {
        self.fail_symbols = symbols.iter().map(|s| s.to_uppercase()).collect();
        self
    }

    fn base_rate(symbol: &str) -> Option<(&'static str, Decimal)> {
        match symbol.to_uppercase().as_str() {
            "BTC" => Some(("Bitcoin", dec!(97500))),
            "ETH" => Some(("Ethereum", dec!(3450))),
            "SOL" => Some(("Solana", dec!(195))),
            "DOGE" => Some(("Dogecoin", dec!(0.38))),
            _ => None,
        }
    }
}

#[async_trait]
impl QuoteProvider for MockQuoteProvider {
    async fn top_gainers(&self) -> Result<Vec<GainerQuote>> {
        if self.rate_limited {
            return Err(AdvisorError::RateLimited(
                "Thank you for using Alpha Vantage! Our standard API call frequency is 25 requests per day.".into(),
            ));
        }
        Ok(self.gainers.clone())
    }

    async fn exchange_rate(&self, symbol: &str) -> Result<CryptoRate> {
        if self.rate_limited {
            return Err(AdvisorError::RateLimited("API call frequency exceeded".into()));
        }
        if self.fail_symbols.contains(&symbol.to_uppercase()) {
            return Err(AdvisorError::MissingField(
                "Realtime Currency Exchange Rate".into(),
            ));
        }

        let (name, price_usd) = Self::base_rate(symbol)
            .ok_or_else(|| AdvisorError::MissingField(format!("unknown symbol {}", symbol)))?;

        Ok(CryptoRate {
            symbol: symbol.to_uppercase(),
            name: name.into(),
            price_usd,
        })
    }

    fn name(&self) -> &str {
        "MockQuotes"
    }
}

fn default_gainers() -> Vec<GainerQuote> {
    vec![
        GainerQuote {
            ticker: "NVDA".into(),
            price: "142.50".into(),
            change_percentage: "8.4%".into(),
        },
        GainerQuote {
            ticker: "AAPL".into(),
            price: "231.10".into(),
            change_percentage: "3.1%".into(),
        },
        GainerQuote {
            ticker: "TSLA".into(),
            price: "348.90".into(),
            change_percentage: "2.7%".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_rates() {
        let provider = MockQuoteProvider::new();

        let btc = provider.exchange_rate("btc").await.unwrap();
        assert_eq!(btc.symbol, "BTC");
        assert_eq!(btc.name, "Bitcoin");
        assert!(btc.price_usd > Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let provider = MockQuoteProvider::new();
        assert!(provider.exchange_rate("NOTREAL").await.is_err());
    }

    #[tokio::test]
    async fn test_rate_limited_is_soft() {
        let provider = MockQuoteProvider::new().rate_limited();
        let err = provider.top_gainers().await.unwrap_err();
        assert!(err.is_soft());
    }
}
