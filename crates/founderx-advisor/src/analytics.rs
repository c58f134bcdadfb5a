//! Business Analytics
//!
//! Pure computation over self-reported business metrics: profitability as
//! revenue minus expenses, productivity as the completed-task percentage
//! (0 when no tasks exist), and a single suggestion picked by threshold.
//! Profitability is checked before productivity, so a loss-making team
//! hears about costs even when its task ratio is also poor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Productivity percentage below which the efficiency suggestion fires
pub const LOW_PRODUCTIVITY_THRESHOLD: f64 = 50.0;

const SUGGEST_HEALTHY: &str = "Looks good! Keep scaling 🚀";
const SUGGEST_PROFITABILITY: &str = "Cut costs or increase revenue to improve profitability.";
const SUGGEST_PRODUCTIVITY: &str = "Focus on team efficiency to improve productivity.";

/// Self-reported metrics for one analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusinessMetrics {
    /// Revenue in USD
    pub revenue: Decimal,

    /// Expenses in USD
    pub expenses: Decimal,

    /// Tasks completed in the period
    pub tasks_completed: u32,

    /// Tasks planned in the period
    pub tasks_total: u32,
}

/// Computed analysis plus the threshold-picked suggestion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Revenue minus expenses, in USD (negative for a loss)
    pub profitability: Decimal,

    /// Completed-task percentage, 0-100 (0 when no tasks were planned)
    pub productivity: f64,

    /// One actionable suggestion
    pub suggestion: String,
}

/// Analyze one set of business metrics
pub fn analyze(metrics: &BusinessMetrics) -> AnalyticsReport {
    let profitability = metrics.revenue - metrics.expenses;
    let productivity = if metrics.tasks_total > 0 {
        f64::from(metrics.tasks_completed) / f64::from(metrics.tasks_total) * 100.0
    } else {
        0.0
    };

    let suggestion = if profitability < Decimal::ZERO {
        SUGGEST_PROFITABILITY
    } else if productivity < LOW_PRODUCTIVITY_THRESHOLD {
        SUGGEST_PRODUCTIVITY
    } else {
        SUGGEST_HEALTHY
    };

    AnalyticsReport {
        profitability,
        productivity,
        suggestion: suggestion.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn metrics(revenue: Decimal, expenses: Decimal, completed: u32, total: u32) -> BusinessMetrics {
        BusinessMetrics {
            revenue,
            expenses,
            tasks_completed: completed,
            tasks_total: total,
        }
    }

    #[test]
    fn test_healthy_business_scales() {
        let report = analyze(&metrics(dec!(12000), dec!(8000), 9, 10));
        assert_eq!(report.profitability, dec!(4000));
        assert_eq!(report.productivity, 90.0);
        assert_eq!(report.suggestion, SUGGEST_HEALTHY);
    }

    #[test]
    fn test_negative_profitability_wins_over_low_productivity() {
        let report = analyze(&metrics(dec!(5000), dec!(7500), 1, 10));
        assert_eq!(report.profitability, dec!(-2500));
        assert_eq!(report.suggestion, SUGGEST_PROFITABILITY);
    }

    #[test]
    fn test_low_productivity_suggestion() {
        let report = analyze(&metrics(dec!(10000), dec!(4000), 4, 10));
        assert_eq!(report.productivity, 40.0);
        assert_eq!(report.suggestion, SUGGEST_PRODUCTIVITY);
    }

    #[test]
    fn test_zero_planned_tasks_does_not_divide() {
        let report = analyze(&metrics(dec!(1000), dec!(500), 0, 0));
        assert_eq!(report.productivity, 0.0);
        // productivity 0 < 50, so the efficiency suggestion fires
        assert_eq!(report.suggestion, SUGGEST_PRODUCTIVITY);
    }

    #[test]
    fn test_break_even_is_not_a_loss() {
        let report = analyze(&metrics(dec!(3000), dec!(3000), 10, 10));
        assert_eq!(report.profitability, Decimal::ZERO);
        assert_eq!(report.suggestion, SUGGEST_HEALTHY);
    }
}
