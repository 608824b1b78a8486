//! Savings Rate Insight
//!
//! Describes how much of the period's income was kept, in four bands.

use crate::aggregate::FinancialSummary;
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, SavingsBand, SavingsRateData, Severity};

/// Insight that narrates the savings rate
pub struct SavingsRateInsight;

impl SavingsRateInsight {
    pub fn new() -> Self {
        Self
    }

    fn narrative(rate: f64, band: SavingsBand) -> String {
        match band {
            SavingsBand::Excellent => format!(
                "Your savings rate of {:.1}% is excellent. Consider investing some of your \
                 savings for long-term growth.",
                rate
            ),
            SavingsBand::Good => format!(
                "Your savings rate of {:.1}% is good. You're on track to meet your financial goals.",
                rate
            ),
            SavingsBand::Modest => format!(
                "Your savings rate of {:.1}% is modest. Look for ways to reduce expenses or \
                 increase income.",
                rate
            ),
            SavingsBand::Low => format!(
                "Your savings rate of {:.1}% is low. Review your budget to find opportunities \
                 to save more.",
                rate
            ),
        }
    }
}

impl Default for SavingsRateInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for SavingsRateInsight {
    fn id(&self) -> InsightType {
        InsightType::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let summary = FinancialSummary::from_transactions(ctx.current);

        // Rate is undefined without income
        if summary.total_income <= 0.0 {
            return Ok(vec![]);
        }

        let band = SavingsBand::from_rate(summary.savings_rate);
        let severity = match band {
            SavingsBand::Excellent | SavingsBand::Good => Severity::Info,
            SavingsBand::Modest => Severity::Attention,
            SavingsBand::Low => Severity::Warning,
        };

        let data = SavingsRateData {
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            savings_rate: summary.savings_rate,
            band,
        };

        let finding = Finding::new(
            InsightType::SavingsRate,
            "savings_rate",
            severity,
            "Savings Rate",
            Self::narrative(summary.savings_rate, band),
        )
        .with_data(serde_json::to_value(&data).unwrap_or_default());

        Ok(vec![finding])
    }
}
