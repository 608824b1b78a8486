//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::forecast::ForecastAccuracy;
use crate::models::{Difficulty, Forecast};

/// Types of insights that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Savings rate narrative
    SavingsRate,
    /// Per-category spending trend vs the previous period
    SpendingTrend,
    /// Forward-looking forecast summary
    ForecastOutlook,
    /// Actionable savings suggestions
    SavingsOpportunity,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::SavingsRate => "savings_rate",
            InsightType::SpendingTrend => "spending_trend",
            InsightType::ForecastOutlook => "forecast_outlook",
            InsightType::SavingsOpportunity => "savings_opportunity",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "savings_rate" => Ok(InsightType::SavingsRate),
            "spending_trend" => Ok(InsightType::SpendingTrend),
            "forecast_outlook" => Ok(InsightType::ForecastOutlook),
            "savings_opportunity" => Ok(InsightType::SavingsOpportunity),
            _ => Err(format!("Unknown insight type: {}", s)),
        }
    }
}

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
    /// Requires immediate attention
    Alert,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
            Severity::Alert => "alert",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Attention => 2,
            Severity::Warning => 3,
            Severity::Alert => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A finding produced by an insight analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Type of insight that generated this finding
    pub insight_type: InsightType,
    /// Unique key within one run (e.g., "trend:Food")
    pub key: String,
    /// How urgent/important this finding is
    pub severity: Severity,
    /// Short title for the finding (e.g., "Savings Rate")
    pub title: String,
    /// One-line summary
    pub summary: String,
    /// Optional longer explanation with details
    pub detail: Option<String>,
    /// Insight-specific structured data
    pub data: serde_json::Value,
}

impl Finding {
    pub fn new(
        insight_type: InsightType,
        key: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            insight_type,
            key: key.into(),
            severity,
            title: title.into(),
            summary: summary.into(),
            detail: None,
            data: serde_json::Value::Null,
        }
    }

    /// Add optional detail text
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Qualitative band for a savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsBand {
    Excellent,
    Good,
    Modest,
    Low,
}

impl SavingsBand {
    /// Bands: above 50%, above 20%, above 10%, otherwise low
    pub fn from_rate(rate: f64) -> Self {
        if rate > 50.0 {
            Self::Excellent
        } else if rate > 20.0 {
            Self::Good
        } else if rate > 10.0 {
            Self::Modest
        } else {
            Self::Low
        }
    }
}

/// Data for savings rate insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRateData {
    pub total_income: f64,
    pub total_expenses: f64,
    pub savings_rate: f64,
    pub band: SavingsBand,
}

/// Direction of a category's spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    /// No spending in this category last period
    New,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
            Trend::New => "new",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data for spending trend insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingTrendData {
    pub category: String,
    pub current_amount: f64,
    pub previous_amount: f64,
    pub percent_change: f64,
    pub trend: Trend,
}

/// Data for forecast outlook insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOutlookData {
    pub horizon_months: u32,
    pub confidence: f64,
    pub accuracy: ForecastAccuracy,
    pub total_predicted_savings: i64,
    /// Forecast months with negative predicted savings
    pub shortfall_months: Vec<String>,
    pub forecasts: Vec<Forecast>,
}

/// Data for savings opportunity insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsOpportunityData {
    pub suggestion_id: String,
    pub category: String,
    pub monthly_impact: i64,
    pub annual_impact: i64,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_type_serialization() {
        assert_eq!(InsightType::SpendingTrend.as_str(), "spending_trend");
        assert_eq!(
            InsightType::from_str("forecast_outlook").unwrap(),
            InsightType::ForecastOutlook
        );
        assert!(InsightType::from_str("horoscope").is_err());
    }

    #[test]
    fn test_severity_priority() {
        assert!(Severity::Alert.priority() > Severity::Warning.priority());
        assert!(Severity::Warning.priority() > Severity::Attention.priority());
        assert!(Severity::Attention.priority() > Severity::Info.priority());
    }

    #[test]
    fn test_finding_builder() {
        let finding = Finding::new(
            InsightType::SavingsOpportunity,
            "test:key",
            Severity::Warning,
            "Test Title",
            "Test summary",
        )
        .with_detail("More details here")
        .with_data(serde_json::json!({"amount": 10.0}));

        assert_eq!(finding.key, "test:key");
        assert_eq!(finding.detail.unwrap(), "More details here");
        assert_eq!(finding.data["amount"], 10.0);
    }

    #[test]
    fn test_savings_bands() {
        assert_eq!(SavingsBand::from_rate(70.66), SavingsBand::Excellent);
        assert_eq!(SavingsBand::from_rate(50.0), SavingsBand::Good);
        assert_eq!(SavingsBand::from_rate(15.0), SavingsBand::Modest);
        assert_eq!(SavingsBand::from_rate(10.0), SavingsBand::Low);
        assert_eq!(SavingsBand::from_rate(-20.0), SavingsBand::Low);
    }
}
