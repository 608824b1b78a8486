//! Profit Assistant Core Library
//!
//! Forecasting and suggestion engine for a small-business profit dashboard:
//! - Monthly and per-category aggregation of transactions
//! - Linear-trend forecasts with a data-volume confidence score
//! - Rule-based savings suggestions with impact and difficulty
//! - Insight engine combining the above into dashboard findings
//! - Unit-economics calculators: profit margin, selling price, bulk orders
//! - Keyword-driven answers to free-form questions over the same numbers
//! - Transaction loading from JSON/CSV and a built-in sample data set
//!
//! The engine functions are pure: they take transaction slices and return
//! fresh values. Only loading and configuration can fail.

pub mod aggregate;
pub mod assistant;
pub mod config;
pub mod error;
pub mod forecast;
pub mod import;
pub mod insights;
pub mod models;
pub mod pricing;
pub mod sample;
pub mod suggestions;

pub use aggregate::{category_breakdown, group_by_month, FinancialSummary};
pub use assistant::{Answer, QueryIntent, QueryResponder};
pub use config::{EngineConfig, ForecastConfig, InsightThresholds, SuggestionThresholds};
pub use error::{Error, Result};
pub use forecast::{
    forecast_confidence, generate_forecasts, ConfidenceModel, ForecastAccuracy, ForecastReport,
    Forecaster, LabelAnchor, LinearModel,
};
pub use import::load_transactions;
pub use insights::{AnalysisContext, Finding, InsightEngine};
pub use models::{
    Difficulty, Forecast, MonthBucket, MonthKey, Suggestion, Transaction, TransactionType,
};
pub use pricing::{
    calculate_profit_margin, quote_bulk_order, quote_price, BulkOrder, BulkOrderQuote, OrderLine,
    PriceQuote, ProfitMarginInput, ProfitMarginReport, UnitCosts,
};
pub use sample::sample_transactions;
pub use suggestions::{
    filter_by_difficulty, generate_suggestions, sort_by_impact, SuggestionEngine,
};
