//! Insight Engine - runs the registered analyzers over one analysis context

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::models::Transaction;
use crate::Result;

use super::types::{Finding, InsightType};
use super::{
    ForecastOutlookInsight, SavingsOpportunityInsight, SavingsRateInsight, SpendingTrendInsight,
};

/// Context provided to insight analyzers
pub struct AnalysisContext<'a> {
    /// Transactions for the period being analyzed
    pub current: &'a [Transaction],
    /// Transactions for the comparison period (may be empty)
    pub previous: &'a [Transaction],
    /// Reference date for forecast labels
    pub today: NaiveDate,
    /// Thresholds and forecast settings
    pub config: &'a EngineConfig,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        current: &'a [Transaction],
        previous: &'a [Transaction],
        today: NaiveDate,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            current,
            previous,
            today,
            config,
        }
    }
}

/// Trait for insight analyzers
pub trait Insight: Send + Sync {
    /// Unique identifier for this insight type
    fn id(&self) -> InsightType;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze data and produce findings
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>>;
}

/// The main insight engine that orchestrates analysis
pub struct InsightEngine {
    insights: Vec<Box<dyn Insight>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new insight engine with built-in insight types
    pub fn new() -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(SavingsRateInsight::new()));
        engine.register(Box::new(SpendingTrendInsight::new()));
        engine.register(Box::new(ForecastOutlookInsight::new()));
        engine.register(Box::new(SavingsOpportunityInsight::new()));

        engine
    }

    /// An engine with no analyzers registered
    pub fn empty() -> Self {
        Self { insights: vec![] }
    }

    /// Register an insight analyzer
    pub fn register(&mut self, insight: Box<dyn Insight>) {
        self.insights.push(insight);
    }

    /// Run all insight analyzers and collect findings
    ///
    /// A failing analyzer is logged and skipped. Findings are ordered by
    /// severity (highest first), then registration order.
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut all_findings = vec![];

        for insight in &self.insights {
            match insight.analyze(ctx) {
                Ok(findings) => {
                    tracing::debug!(
                        insight = insight.id().as_str(),
                        count = findings.len(),
                        "Insight analysis complete"
                    );
                    all_findings.extend(findings);
                }
                Err(e) => {
                    tracing::warn!(
                        insight = insight.id().as_str(),
                        error = %e,
                        "{} analysis failed, skipping",
                        insight.name()
                    );
                }
            }
        }

        all_findings.sort_by(|a, b| b.severity.priority().cmp(&a.severity.priority()));
        all_findings
    }

    /// Get list of registered insight types
    pub fn insight_types(&self) -> Vec<InsightType> {
        self.insights.iter().map(|i| i.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::insights::types::Severity;
    use crate::sample::sample_transactions;

    struct FailingInsight;

    impl Insight for FailingInsight {
        fn id(&self) -> InsightType {
            InsightType::SpendingTrend
        }

        fn name(&self) -> &'static str {
            "Failing"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
            Err(Error::InvalidData("boom".into()))
        }
    }

    struct FixedInsight(Severity);

    impl Insight for FixedInsight {
        fn id(&self) -> InsightType {
            InsightType::SavingsRate
        }

        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
            Ok(vec![Finding::new(
                self.id(),
                format!("fixed:{}", self.0),
                self.0,
                "Fixed",
                "Fixed finding",
            )])
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let engine = InsightEngine::new();
        let types = engine.insight_types();

        assert!(types.contains(&InsightType::SavingsRate));
        assert!(types.contains(&InsightType::SpendingTrend));
        assert!(types.contains(&InsightType::ForecastOutlook));
        assert!(types.contains(&InsightType::SavingsOpportunity));
    }

    #[test]
    fn test_analyze_empty_input() {
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(&[], &[], today(), &config);
        assert!(InsightEngine::new().analyze_all(&ctx).is_empty());
    }

    #[test]
    fn test_failing_insight_is_skipped() {
        let mut engine = InsightEngine::empty();
        engine.register(Box::new(FailingInsight));
        engine.register(Box::new(FixedInsight(Severity::Info)));

        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(&[], &[], today(), &config);
        let findings = engine.analyze_all(&ctx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].key, "fixed:info");
    }

    #[test]
    fn test_findings_sorted_by_severity() {
        let mut engine = InsightEngine::empty();
        engine.register(Box::new(FixedInsight(Severity::Info)));
        engine.register(Box::new(FixedInsight(Severity::Alert)));
        engine.register(Box::new(FixedInsight(Severity::Attention)));

        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(&[], &[], today(), &config);
        let severities: Vec<Severity> = engine
            .analyze_all(&ctx)
            .iter()
            .map(|f| f.severity)
            .collect();
        assert_eq!(
            severities,
            vec![Severity::Alert, Severity::Attention, Severity::Info]
        );
    }

    #[test]
    fn test_analyze_sample_data() {
        let txs = sample_transactions();
        let config = EngineConfig::default();
        let ctx = AnalysisContext::new(&txs, &[], today(), &config);

        let findings = InsightEngine::new().analyze_all(&ctx);
        assert!(findings
            .iter()
            .any(|f| f.insight_type == InsightType::SavingsRate));
        assert!(findings
            .iter()
            .any(|f| f.insight_type == InsightType::ForecastOutlook));
        // No previous period, so no trends
        assert!(!findings
            .iter()
            .any(|f| f.insight_type == InsightType::SpendingTrend));
    }
}
