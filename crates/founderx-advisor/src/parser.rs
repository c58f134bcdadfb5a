//! AI Response Parser
//!
//! Pure line-by-line scan of the semi-structured Markdown-like text the
//! investment prompt asks for. A small state machine tracks which headed
//! section the scan is in; bullet lines are matched against a primary
//! bolded-name pattern, then a looser fallback. Lines matching neither are
//! dropped silently since the model may emit conversational filler, and
//! missing headings simply yield two empty lists.
//!
//! Primary-then-fallback precedence is deliberate and must not be
//! unified: both patterns can match the same line with different
//! captures.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{RecommendationRecord, RecommendationSet};

/// Bolded-name bullet: `* **AAPL:** Strong fundamentals.`
static PRIMARY_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\* \*\*(.*?):\*\*\s?(.*)").expect("regex: primary bullet"));

/// Looser bullet: `* AAPL: Strong fundamentals.` (stray `**` stripped from
/// the captured name)
static FALLBACK_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\s(.*?):\s?(.*)").expect("regex: fallback bullet"));

/// Which headed section the scan is currently inside
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    None,
    Stocks,
    Crypto,
}

/// Parse AI text into ordered stock and crypto recommendation lists.
///
/// Heading markers are matched case-insensitively anywhere in the line
/// (`**stock` before `**crypto`, mirroring the instruction the prompt
/// gives). Output order matches input line order within each section; no
/// de-duplication is applied.
pub fn parse_recommendations(text: &str) -> RecommendationSet {
    let mut sections = RecommendationSet::default();
    let mut current = Section::None;

    for line in text.lines() {
        let lower = line.to_lowercase();
        if lower.contains("**stock") {
            current = Section::Stocks;
        } else if lower.contains("**crypto") {
            current = Section::Crypto;
        } else if line.starts_with('*') {
            let target = match current {
                Section::Stocks => &mut sections.stocks,
                Section::Crypto => &mut sections.crypto,
                Section::None => continue,
            };
            if let Some(record) = match_bullet(line) {
                target.push(record);
            }
        }
    }

    sections
}

/// Try the primary pattern, then the fallback; `None` drops the line.
fn match_bullet(line: &str) -> Option<RecommendationRecord> {
    if let Some(caps) = PRIMARY_BULLET.captures(line) {
        return Some(RecommendationRecord::new(
            caps[1].trim(),
            caps[2].trim(),
        ));
    }

    if let Some(caps) = FALLBACK_BULLET.captures(line) {
        let name = caps[1].replace("**", "");
        return Some(RecommendationRecord::new(name.trim(), caps[2].trim()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_sections() {
        let text = "\
**Stocks**
* **AAPL:** Strong fundamentals.
* **MSFT:** Cloud growth.
**Cryptocurrency**
* **BTC:** Store of value.";

        let parsed = parse_recommendations(text);
        assert_eq!(parsed.stocks.len(), 2);
        assert_eq!(parsed.crypto.len(), 1);
        assert_eq!(
            parsed.stocks[0],
            RecommendationRecord::new("AAPL", "Strong fundamentals.")
        );
        assert_eq!(parsed.stocks[1].name, "MSFT");
        assert_eq!(parsed.crypto[0].name, "BTC");
    }

    #[test]
    fn test_zero_headings_yields_empty_lists() {
        let text = "* **AAPL:** Never reached, no section active.\nJust prose.";
        let parsed = parse_recommendations(text);
        assert!(parsed.stocks.is_empty());
        assert!(parsed.crypto.is_empty());
    }

    #[test]
    fn test_fallback_pattern_strips_bold_markers() {
        let text = "\
**Stocks**
* **TSLA**: High risk, high reward.";

        // Primary needs `:**`; this line has `**:` so only the fallback
        // matches, and the captured name keeps the source's cleanup.
        let parsed = parse_recommendations(text);
        assert_eq!(parsed.stocks.len(), 1);
        assert_eq!(parsed.stocks[0].name, "TSLA");
        assert_eq!(parsed.stocks[0].reason, "High risk, high reward.");
    }

    #[test]
    fn test_unmatched_bullet_is_dropped_silently() {
        let text = "\
**Stocks**
* just filler without a separator
* **AAPL:** Kept.";

        let parsed = parse_recommendations(text);
        assert_eq!(parsed.stocks.len(), 1);
        assert_eq!(parsed.stocks[0].name, "AAPL");
    }

    #[test]
    fn test_non_bullet_lines_are_ignored() {
        let text = "\
**Stocks**
Here is my analysis:
* **NVDA:** AI demand.
Thanks for asking!";

        let parsed = parse_recommendations(text);
        assert_eq!(parsed.stocks.len(), 1);
    }

    #[test]
    fn test_heading_markers_are_case_insensitive() {
        let text = "\
**STOCKS**
* **AAPL:** Caps heading still counts.
**Crypto holdings**
* **ETH:** Partial heading word still counts.";

        let parsed = parse_recommendations(text);
        assert_eq!(parsed.stocks.len(), 1);
        assert_eq!(parsed.crypto.len(), 1);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let text = "\
**Cryptocurrency**
* **BTC:** First mention.
* **BTC:** Second mention.";

        let parsed = parse_recommendations(text);
        assert_eq!(parsed.crypto.len(), 2);
        assert_eq!(parsed.crypto[0].reason, "First mention.");
        assert_eq!(parsed.crypto[1].reason, "Second mention.");
    }

    #[test]
    fn test_section_switch_mid_text() {
        let text = "\
**Stocks**
* **AAPL:** Stocks section.
**Cryptocurrency**
* **SOL:** Crypto section.
* **DOGE:** Still crypto.";

        let parsed = parse_recommendations(text);
        assert_eq!(parsed.stocks.len(), 1);
        assert_eq!(parsed.crypto.len(), 2);
        assert_eq!(parsed.crypto[1].name, "DOGE");
    }
}
