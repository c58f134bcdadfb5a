//! Startup Domain Lookup
//!
//! Static sector table behind the startup advisor: each sector maps to a
//! recommended domain, a growth score, and a pool of concrete startup
//! ideas. The top domain seeds the AI trend prompt.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;
use crate::model::DomainRecommendation;

/// Sector offered on the startup form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "AI")]
    Ai,
    Fintech,
    HealthTech,
    Logistics,
}

impl Sector {
    pub const ALL: [Sector; 4] = [
        Sector::Ai,
        Sector::Fintech,
        Sector::HealthTech,
        Sector::Logistics,
    ];
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Sector::Ai => "AI",
            Sector::Fintech => "Fintech",
            Sector::HealthTech => "HealthTech",
            Sector::Logistics => "Logistics",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Sector {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AI" => Ok(Sector::Ai),
            "Fintech" => Ok(Sector::Fintech),
            "HealthTech" => Ok(Sector::HealthTech),
            "Logistics" => Ok(Sector::Logistics),
            other => Err(AdvisorError::UnknownSector(other.into())),
        }
    }
}

/// The recommended domain for a sector (one record per sector)
pub fn domain_recommendations(sector: Sector) -> Vec<DomainRecommendation> {
    let (domain, description) = match sector {
        Sector::Ai => ("AI-Powered Logistics", "Optimizing supply chains."),
        Sector::Fintech => ("DeFi Lending", "Peer-to-peer lending."),
        Sector::HealthTech => ("Telemedicine", "Remote patient care."),
        Sector::Logistics => ("Delivery Drones", "Automated delivery."),
    };

    vec![DomainRecommendation::new(domain, description)]
}

/// Projected growth score for a sector (0-100)
pub fn growth_score(sector: Sector) -> u8 {
    match sector {
        Sector::Ai => 95,
        Sector::Fintech => 88,
        Sector::HealthTech => 80,
        Sector::Logistics => 70,
    }
}

/// Concrete startup ideas for a sector, or the top five across all
/// sectors when none is given.
pub fn suggest_ideas(sector: Option<Sector>) -> Vec<&'static str> {
    if let Some(sector) = sector {
        return sector_ideas(sector).to_vec();
    }

    Sector::ALL
        .iter()
        .flat_map(|s| sector_ideas(*s).iter().copied())
        .take(5)
        .collect()
}

fn sector_ideas(sector: Sector) -> &'static [&'static str] {
    match sector {
        Sector::Ai => &[
            "AI-powered healthcare assistant",
            "Predictive analytics for logistics",
        ],
        Sector::Fintech => &["Micro-investment platform", "AI fraud detection"],
        Sector::HealthTech => &["Remote patient monitoring", "AI drug discovery"],
        Sector::Logistics => &[
            "Smart warehouse automation",
            "Delivery optimization AI",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_every_sector_has_one_recommendation() {
        for sector in Sector::ALL {
            assert_eq!(domain_recommendations(sector).len(), 1);
        }
    }

    #[test]
    fn test_top_domain_for_fintech() {
        let recs = domain_recommendations(Sector::Fintech);
        assert_eq!(recs[0].domain, "DeFi Lending");
    }

    #[test]
    fn test_unknown_sector_is_rejected() {
        let err = Sector::from_str("SpaceTech").unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownSector(_)));
    }

    #[test]
    fn test_sector_serde_labels() {
        assert_eq!(serde_json::to_string(&Sector::Ai).unwrap(), "\"AI\"");
        let parsed: Sector = serde_json::from_str("\"HealthTech\"").unwrap();
        assert_eq!(parsed, Sector::HealthTech);
    }

    #[test]
    fn test_cross_sector_ideas_are_capped_at_five() {
        assert_eq!(suggest_ideas(None).len(), 5);
        assert_eq!(suggest_ideas(Some(Sector::Fintech)).len(), 2);
    }

    #[test]
    fn test_growth_scores_rank_sectors() {
        assert!(growth_score(Sector::Ai) > growth_score(Sector::Logistics));
    }
}
