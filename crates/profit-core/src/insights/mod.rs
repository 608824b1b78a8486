//! Insight Engine - Dashboard Insights
//!
//! A pluggable set of analyzers that turn one period of transactions (plus an
//! optional comparison period) into findings for the dashboard.
//!
//! ## Core Insight Types
//!
//! - **Savings Rate** - How much of the income was kept
//! - **Spending Trend** - Per-category direction vs the previous period
//! - **Forecast Outlook** - Projected savings and shortfalls
//! - **Savings Opportunity** - Rule-based suggestions, ranked by impact
//!
//! ## Usage
//!
//! ```rust,ignore
//! use profit_core::insights::{AnalysisContext, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let ctx = AnalysisContext::new(&current, &previous, today, &config);
//! let findings = engine.analyze_all(&ctx);
//! ```

pub mod engine;
pub mod forecast_outlook;
pub mod savings_opportunity;
pub mod savings_rate;
pub mod spending_trend;
pub mod types;

pub use engine::{AnalysisContext, Insight, InsightEngine};
pub use forecast_outlook::ForecastOutlookInsight;
pub use savings_opportunity::SavingsOpportunityInsight;
pub use savings_rate::SavingsRateInsight;
pub use spending_trend::SpendingTrendInsight;
pub use types::{
    Finding, ForecastOutlookData, InsightType, SavingsBand, SavingsOpportunityData,
    SavingsRateData, Severity, SpendingTrendData, Trend,
};
