//! Prompt Builder
//!
//! Assembles the system instruction and user query for the two AI calls.
//! The formatting rules in the system instruction are load-bearing: the
//! response parser depends on the headed-sections-with-bold-bullets
//! contract holding. Fetched market text is embedded verbatim (trusted).

use crate::model::{MarketSnapshot, UserProfile};

/// System instruction for the investment call.
///
/// Mandates the exact output format the parser scans for: two headed
/// sections, bold names, `*` bullet markers.
pub const INVESTMENT_SYSTEM_PROMPT: &str = r#"You are a sharp financial analyst. Your recommendations must be directly influenced by the user's profile and the provided real-time data. YOU MUST FOLLOW THE FORMATTING INSTRUCTIONS EXACTLY. Do not add any introduction or conclusion.

    **FORMATTING RULES:**
    - Create two sections: '**Stocks**' and '**Cryptocurrency**'.
    - Under each section, list 2-3 items.
    - Each item must be a bullet point starting with '*'.
    - The name/ticker MUST be bolded.
    - The final output for each item MUST look like this example:
      * **AAPL:** With your moderate risk tolerance, Apple offers stability...

    FAILURE TO FOLLOW THIS FORMAT WILL RESULT IN AN ERROR."#;

/// A system instruction plus a user query
#[derive(Clone, Debug)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the investment prompt from the profile and the frozen snapshot.
///
/// Profile fields and both summary strings are interpolated verbatim; no
/// escaping is applied.
pub fn investment_prompt(profile: &UserProfile, snapshot: &MarketSnapshot) -> Prompt {
    let user = format!(
        "**User Profile:** - Budget: ${} USD, Time: {}, Risk: {}. \
         **Real-Time Data:** - Stocks: [{}], Crypto: [{}]. \
         Based only on this, provide a concise, actionable investment plan \
         explicitly referencing the user's profile in your justification.",
        profile.budget, profile.horizon, profile.risk, snapshot.stock_summary,
        snapshot.crypto_summary
    );

    Prompt {
        system: INVESTMENT_SYSTEM_PROMPT.into(),
        user,
    }
}

/// Build the chart-seed prompt for a startup domain.
///
/// Asks for raw JSON; the caller still strips fenced-code markers before
/// parsing because the provider routinely wraps JSON anyway.
pub fn trend_prompt(domain: &str) -> String {
    format!(
        "Generate a plausible JSON object for a market growth trend for a \"{}\" startup. \
         The trend should reflect a recent (hypothetical) market event. \
         The JSON must have \"labels\" (12 months, e.g., \"Oct '25\") and \"values\" \
         (12 numbers between 20-100). The data must be different each time this prompt \
         is run. Raw JSON only.",
        domain
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Horizon, RiskTolerance};
    use rust_decimal_macros::dec;

    fn sample_profile() -> UserProfile {
        UserProfile::new(dec!(10000), Horizon::SixMonths, RiskTolerance::Moderate)
    }

    #[test]
    fn test_user_query_embeds_profile_and_snapshot() {
        let snapshot = MarketSnapshot {
            stock_summary: "Ticker: NVDA, Price: 142.50, Change: 8.4%".into(),
            crypto_summary: "Bitcoin: Price $97500.00".into(),
        };

        let prompt = investment_prompt(&sample_profile(), &snapshot);
        assert!(prompt.user.contains("Budget: $10000 USD"));
        assert!(prompt.user.contains("Time: 6 months"));
        assert!(prompt.user.contains("Risk: Moderate"));
        assert!(prompt.user.contains("Stocks: [Ticker: NVDA, Price: 142.50, Change: 8.4%]"));
        assert!(prompt.user.contains("Crypto: [Bitcoin: Price $97500.00]"));
    }

    #[test]
    fn test_system_prompt_carries_format_contract() {
        let prompt = investment_prompt(
            &sample_profile(),
            &MarketSnapshot {
                stock_summary: String::new(),
                crypto_summary: String::new(),
            },
        );
        assert!(prompt.system.contains("'**Stocks**'"));
        assert!(prompt.system.contains("'**Cryptocurrency**'"));
        assert!(prompt.system.contains("* **AAPL:**"));
    }

    #[test]
    fn test_trend_prompt_names_domain() {
        let prompt = trend_prompt("DeFi Lending");
        assert!(prompt.contains("\"DeFi Lending\" startup"));
        assert!(prompt.contains("Raw JSON only."));
    }
}
