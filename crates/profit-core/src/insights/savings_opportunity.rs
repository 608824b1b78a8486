//! Savings Opportunity Insight
//!
//! Surfaces each rule-based suggestion as a finding, graded by annual impact.

use crate::error::Result;
use crate::suggestions::{sort_by_impact, SuggestionEngine};

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightType, SavingsOpportunityData, Severity};

/// Insight that identifies savings opportunities
pub struct SavingsOpportunityInsight;

impl SavingsOpportunityInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsOpportunityInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for SavingsOpportunityInsight {
    fn id(&self) -> InsightType {
        InsightType::SavingsOpportunity
    }

    fn name(&self) -> &'static str {
        "Savings Opportunity"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let engine = SuggestionEngine::with_thresholds(ctx.config.suggestions.clone());
        let suggestions = sort_by_impact(&engine.generate(ctx.current, ctx.previous));

        let findings = suggestions
            .into_iter()
            .map(|s| {
                let annual_impact = s.impact * 12;
                let severity = if annual_impact > 2400 {
                    Severity::Warning
                } else if annual_impact > 600 {
                    Severity::Attention
                } else {
                    Severity::Info
                };

                let data = SavingsOpportunityData {
                    suggestion_id: s.id.clone(),
                    category: s.category.clone(),
                    monthly_impact: s.impact,
                    annual_impact,
                    difficulty: s.difficulty,
                };

                Finding::new(
                    InsightType::SavingsOpportunity,
                    format!("savings:{}", s.title.to_lowercase().replace(' ', "_")),
                    severity,
                    s.title.clone(),
                    format!(
                        "Could save ~${}/month (${}/year), {} to do",
                        s.impact, annual_impact, s.difficulty
                    ),
                )
                .with_detail(s.description)
                .with_data(serde_json::to_value(&data).unwrap_or_default())
            })
            .collect();

        Ok(findings)
    }
}
