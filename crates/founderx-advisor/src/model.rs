//! Domain Models
//!
//! Data types shared by the two advisory pipelines. All entities are
//! transient: created per submission, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Investment horizon offered on the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "3 months")]
    ThreeMonths,
    #[serde(rename = "6 months")]
    SixMonths,
    #[serde(rename = "1 year")]
    OneYear,
    #[serde(rename = "3+ years")]
    ThreeYearsPlus,
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Horizon::ThreeMonths => "3 months",
            Horizon::SixMonths => "6 months",
            Horizon::OneYear => "1 year",
            Horizon::ThreeYearsPlus => "3+ years",
        };
        write!(f, "{}", label)
    }
}

/// Risk tolerance offered on the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskTolerance::Low => "Low",
            RiskTolerance::Moderate => "Moderate",
            RiskTolerance::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// User-supplied investment profile, created per form submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    /// Budget in USD
    pub budget: Decimal,

    /// Investment horizon
    pub horizon: Horizon,

    /// Risk tolerance
    pub risk: RiskTolerance,
}

impl UserProfile {
    pub fn new(budget: Decimal, horizon: Horizon, risk: RiskTolerance) -> Self {
        Self {
            budget,
            horizon,
            risk,
        }
    }
}

/// Flattened market summaries, built once per request and immutable after
/// construction. Discarded as soon as the prompt is assembled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Human-readable top-gainers summary (or the stock sentinel)
    pub stock_summary: String,

    /// Human-readable crypto rates summary (or the crypto sentinel)
    pub crypto_summary: String,
}

/// A single (name, justification) pair extracted from AI text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Ticker or asset name
    pub name: String,

    /// Justification text
    pub reason: String,
}

impl RecommendationRecord {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Parsed recommendations, grouped into two ordered lists.
///
/// Duplicates from the AI text are preserved in input order; there is no
/// uniqueness constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub stocks: Vec<RecommendationRecord>,
    pub crypto: Vec<RecommendationRecord>,
}

impl RecommendationSet {
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty() && self.crypto.is_empty()
    }
}

/// A startup domain suggestion from the static sector table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecommendation {
    /// Recommended startup domain
    pub domain: String,

    /// One-line description
    pub description: String,
}

impl DomainRecommendation {
    pub fn new(domain: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_horizon_labels_round_trip() {
        let json = serde_json::to_string(&Horizon::ThreeYearsPlus).unwrap();
        assert_eq!(json, "\"3+ years\"");
        let back: Horizon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Horizon::ThreeYearsPlus);
        assert_eq!(back.to_string(), "3+ years");
    }

    #[test]
    fn test_profile_construction() {
        let profile = UserProfile::new(dec!(10000), Horizon::SixMonths, RiskTolerance::Moderate);
        assert_eq!(profile.budget, dec!(10000));
        assert_eq!(profile.risk.to_string(), "Moderate");
    }
}
