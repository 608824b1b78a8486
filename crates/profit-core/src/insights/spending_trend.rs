//! Spending Trend Insight
//!
//! Compares each expense category against the previous period. Changes within
//! the configured stable band (default ±5%) count as stable. Without a previous period
//! there is no baseline and no findings are produced.

use crate::aggregate::{category_breakdown, percent_change};
use crate::error::Result;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, Severity, SpendingTrendData, Trend};

/// Insight that labels each category's spending direction
///
/// Bands come from `[insights]` in the engine config.
pub struct SpendingTrendInsight;

impl SpendingTrendInsight {
    pub fn new() -> Self {
        Self
    }

    fn classify(current: f64, previous: f64, stable_band: f64) -> (Trend, f64) {
        if previous <= 0.0 {
            return (Trend::New, 0.0);
        }

        let change = percent_change(current, previous);
        let trend = if change > stable_band {
            Trend::Increasing
        } else if change < -stable_band {
            Trend::Decreasing
        } else {
            Trend::Stable
        };
        (trend, change)
    }
}

impl Default for SpendingTrendInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for SpendingTrendInsight {
    fn id(&self) -> InsightType {
        InsightType::SpendingTrend
    }

    fn name(&self) -> &'static str {
        "Spending Trend"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        if ctx.previous.is_empty() {
            return Ok(vec![]);
        }

        let thresholds = &ctx.config.insights;
        let current = category_breakdown(ctx.current);
        let previous = category_breakdown(ctx.previous);
        let mut findings = Vec::new();

        for (category, &amount) in &current {
            let previous_amount = previous.get(category).copied().unwrap_or(0.0);
            let (trend, change) =
                Self::classify(amount, previous_amount, thresholds.trend_stable_band);

            let severity = if trend == Trend::Increasing
                && change > thresholds.trend_attention_increase
            {
                Severity::Attention
            } else {
                Severity::Info
            };

            let summary = match trend {
                Trend::New => format!("New spending on {}: ${:.2}", category, amount),
                Trend::Stable => format!("{} spending is stable at ${:.2}", category, amount),
                Trend::Increasing | Trend::Decreasing => format!(
                    "{} spending is {} ({:+.0}%, ${:.2} vs ${:.2})",
                    category, trend, change, amount, previous_amount
                ),
            };

            let data = SpendingTrendData {
                category: category.clone(),
                current_amount: amount,
                previous_amount,
                percent_change: change,
                trend,
            };

            findings.push(
                Finding::new(
                    InsightType::SpendingTrend,
                    format!("trend:{}", category),
                    severity,
                    format!("{} Spending", category),
                    summary,
                )
                .with_data(serde_json::to_value(&data).unwrap_or_default()),
            );
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{Transaction, TransactionType};
    use chrono::NaiveDate;

    fn expense(amount: f64, category: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}", category, amount),
            date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            description: String::new(),
            amount: -amount,
            category: category.to_string(),
            kind: TransactionType::Expense,
        }
    }

    fn trends(current: &[Transaction], previous: &[Transaction]) -> Vec<SpendingTrendData> {
        trends_with(&EngineConfig::default(), current, previous)
    }

    fn trends_with(
        config: &EngineConfig,
        current: &[Transaction],
        previous: &[Transaction],
    ) -> Vec<SpendingTrendData> {
        let ctx = AnalysisContext::new(
            current,
            previous,
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            config,
        );
        SpendingTrendInsight::new()
            .analyze(&ctx)
            .unwrap()
            .into_iter()
            .map(|f| serde_json::from_value(f.data).unwrap())
            .collect()
    }

    #[test]
    fn test_classifies_each_category() {
        let current = vec![
            expense(150.0, "Ads"),
            expense(80.0, "Food"),
            expense(102.0, "Rent"),
            expense(40.0, "Shipping"),
        ];
        let previous = vec![
            expense(100.0, "Ads"),
            expense(100.0, "Food"),
            expense(100.0, "Rent"),
        ];

        let result = trends(&current, &previous);
        let by_category: Vec<(&str, Trend)> = result
            .iter()
            .map(|d| (d.category.as_str(), d.trend))
            .collect();

        assert_eq!(
            by_category,
            vec![
                ("Ads", Trend::Increasing),
                ("Food", Trend::Decreasing),
                ("Rent", Trend::Stable),
                ("Shipping", Trend::New),
            ]
        );
        assert!((result[0].percent_change - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_increase_needs_attention() {
        let config = EngineConfig::default();
        let current = vec![expense(150.0, "Ads")];
        let previous = vec![expense(100.0, "Ads")];
        let ctx = AnalysisContext::new(
            &current,
            &previous,
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            &config,
        );

        let findings = SpendingTrendInsight::new().analyze(&ctx).unwrap();
        assert_eq!(findings[0].severity, Severity::Attention);
        assert!(findings[0].summary.contains("+50%"));
    }

    #[test]
    fn test_configured_stable_band() {
        let mut config = EngineConfig::default();
        config.insights.trend_stable_band = 60.0;
        config.insights.trend_attention_increase = 80.0;

        let current = vec![expense(150.0, "Ads")];
        let previous = vec![expense(100.0, "Ads")];
        let result = trends_with(&config, &current, &previous);
        assert_eq!(result[0].trend, Trend::Stable);
    }

    #[test]
    fn test_no_previous_period() {
        assert!(trends(&[expense(10.0, "Food")], &[]).is_empty());
    }

    #[test]
    fn test_same_input_same_trends() {
        let current = vec![expense(120.0, "Food")];
        let previous = vec![expense(100.0, "Food")];
        let first: Vec<Trend> = trends(&current, &previous).iter().map(|d| d.trend).collect();
        let second: Vec<Trend> = trends(&current, &previous).iter().map(|d| d.trend).collect();
        assert_eq!(first, second);
    }
}
