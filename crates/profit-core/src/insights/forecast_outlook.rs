//! Forecast Outlook Insight
//!
//! Summarizes the forecast horizon and flags months where expenses are
//! projected to exceed income.

use crate::error::Result;
use crate::forecast::Forecaster;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, ForecastOutlookData, InsightType, Severity};

/// Insight that turns the forecast into a single outlook finding
pub struct ForecastOutlookInsight;

impl ForecastOutlookInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ForecastOutlookInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for ForecastOutlookInsight {
    fn id(&self) -> InsightType {
        InsightType::ForecastOutlook
    }

    fn name(&self) -> &'static str {
        "Forecast Outlook"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        // Nothing to project from
        if ctx.current.is_empty() {
            return Ok(vec![]);
        }

        let forecaster = Forecaster::from_config(&ctx.config.forecast);
        let report = forecaster.report(ctx.current, ctx.today);

        let total_predicted_savings: i64 =
            report.forecasts.iter().map(|f| f.predicted_savings).sum();
        let shortfall_months: Vec<String> = report
            .forecasts
            .iter()
            .filter(|f| f.predicted_savings < 0)
            .map(|f| f.month.clone())
            .collect();

        let (severity, summary) = if shortfall_months.is_empty() {
            (
                Severity::Info,
                format!(
                    "Projected savings of ${} over the next {} months",
                    total_predicted_savings,
                    forecaster.horizon()
                ),
            )
        } else {
            (
                Severity::Warning,
                format!(
                    "Expenses are projected to exceed income in {}",
                    shortfall_months.join(", ")
                ),
            )
        };

        let detail = format!(
            "{} (confidence {:.0}%, {} months of history)",
            report.accuracy.message(),
            report.confidence * 100.0,
            report.months_of_data
        );

        let data = ForecastOutlookData {
            horizon_months: forecaster.horizon(),
            confidence: report.confidence,
            accuracy: report.accuracy,
            total_predicted_savings,
            shortfall_months,
            forecasts: report.forecasts,
        };

        let finding = Finding::new(
            InsightType::ForecastOutlook,
            format!("forecast:{}", forecaster.horizon()),
            severity,
            format!("{}-Month Outlook", forecaster.horizon()),
            summary,
        )
        .with_detail(detail)
        .with_data(serde_json::to_value(&data).unwrap_or_default());

        Ok(vec![finding])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{Transaction, TransactionType};
    use crate::sample::sample_transactions;
    use chrono::NaiveDate;

    fn run(txs: &[Transaction]) -> Vec<Finding> {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(
            txs,
            &[],
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            &config,
        );
        ForecastOutlookInsight::new().analyze(&ctx).unwrap()
    }

    #[test]
    fn test_sample_outlook() {
        let findings = run(&sample_transactions());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].title, "6-Month Outlook");

        let data: ForecastOutlookData = serde_json::from_value(findings[0].data.clone()).unwrap();
        // Flat projection of the single sample month: 6800 - 1995
        assert_eq!(data.total_predicted_savings, 4805 * 6);
        assert_eq!(data.forecasts[0].month, "May");
        assert!((data.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_shortfall_warns() {
        let txs = vec![
            Transaction {
                id: "1".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                description: "Sales".into(),
                amount: 1000.0,
                category: "Income".into(),
                kind: TransactionType::Income,
            },
            Transaction {
                id: "2".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                description: "Rent".into(),
                amount: -1500.0,
                category: "Housing".into(),
                kind: TransactionType::Expense,
            },
        ];

        let findings = run(&txs);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].summary.contains("May"));
    }

    #[test]
    fn test_no_data_no_outlook() {
        assert!(run(&[]).is_empty());
    }
}
