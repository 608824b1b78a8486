//! Linear-trend forecasting over monthly aggregates
//!
//! Income and expenses are each fitted with ordinary least squares against the
//! chronological month index, then projected forward. Degenerate input never
//! fails: with no spread in x the fit falls back to a flat line at the mean,
//! and with no data at all to a flat line at zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::group_by_month;
use crate::config::ForecastConfig;
use crate::models::{Forecast, MonthKey, Transaction};

/// A fitted straight line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Ordinary least squares fit
    ///
    /// Both slices must have the same length.
    pub fn fit(x: &[f64], y: &[f64]) -> Self {
        let n = x.len().min(y.len());
        if n == 0 {
            return Self {
                slope: 0.0,
                intercept: 0.0,
            };
        }

        let x_mean = x[..n].iter().sum::<f64>() / n as f64;
        let y_mean = y[..n].iter().sum::<f64>() / n as f64;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (xi, yi) in x[..n].iter().zip(&y[..n]) {
            numerator += (xi - x_mean) * (yi - y_mean);
            denominator += (xi - x_mean).powi(2);
        }

        let slope = if denominator != 0.0 {
            numerator / denominator
        } else {
            0.0
        };

        Self {
            slope,
            intercept: y_mean - slope * x_mean,
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Which month forecast labels count forward from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    /// The month of the `today` date passed in (wall clock by default)
    Today,
    /// The last month present in the transaction data
    #[serde(rename = "data", alias = "last_observed")]
    LastObserved,
}

impl LabelAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::LastObserved => "data",
        }
    }
}

impl std::str::FromStr for LabelAnchor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" | "now" => Ok(Self::Today),
            "data" | "last_observed" => Ok(Self::LastObserved),
            _ => Err(format!("Unknown forecast anchor: {}", s)),
        }
    }
}

impl std::fmt::Display for LabelAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heuristic confidence from the number of months of history
///
/// Not a statistical interval: `min(base + step * months, cap)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceModel {
    #[serde(rename = "confidence_base")]
    pub base: f64,
    #[serde(rename = "confidence_step")]
    pub step: f64,
    #[serde(rename = "confidence_cap")]
    pub cap: f64,
}

impl Default for ConfidenceModel {
    fn default() -> Self {
        Self {
            base: 0.5,
            step: 0.1,
            cap: 0.9,
        }
    }
}

impl ConfidenceModel {
    pub fn score(&self, months_of_data: usize) -> f64 {
        (self.base + self.step * months_of_data as f64).min(self.cap)
    }
}

/// Qualitative reliability of a forecast, from raw transaction volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastAccuracy {
    Low,
    Medium,
    High,
}

impl ForecastAccuracy {
    pub fn assess(transaction_count: usize) -> Self {
        if transaction_count > 50 {
            Self::High
        } else if transaction_count > 20 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::High => {
                "High confidence: Your forecasts are based on substantial historical data."
            }
            Self::Medium => "Medium confidence: Your forecasts have a reasonable data foundation.",
            Self::Low => {
                "Low confidence: More transaction history will improve forecast accuracy."
            }
        }
    }
}

/// Forecasts plus the numbers that qualify them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub forecasts: Vec<Forecast>,
    pub confidence: f64,
    pub months_of_data: usize,
    pub accuracy: ForecastAccuracy,
    pub income_trend: LinearModel,
    pub expense_trend: LinearModel,
}

/// Projects income, expenses and savings for future months
#[derive(Debug, Clone)]
pub struct Forecaster {
    horizon: u32,
    anchor: LabelAnchor,
    confidence: ConfidenceModel,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Forecaster {
    pub fn new() -> Self {
        Self::from_config(&ForecastConfig::default())
    }

    pub fn from_config(config: &ForecastConfig) -> Self {
        Self {
            horizon: config.horizon_months,
            anchor: config.anchor,
            confidence: config.confidence,
        }
    }

    pub fn with_horizon(mut self, months: u32) -> Self {
        self.horizon = months;
        self
    }

    pub fn with_anchor(mut self, anchor: LabelAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Forecast the next `horizon` months
    ///
    /// `today` only affects labels (and only with `LabelAnchor::Today`).
    pub fn forecast(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Forecast> {
        self.report(transactions, today).forecasts
    }

    /// Confidence score for forecasts built from `transactions`
    pub fn confidence(&self, transactions: &[Transaction]) -> f64 {
        self.confidence.score(group_by_month(transactions).len())
    }

    /// Forecasts with confidence, accuracy and the fitted trends
    pub fn report(&self, transactions: &[Transaction], today: NaiveDate) -> ForecastReport {
        let monthly = group_by_month(transactions);
        let n = monthly.len();

        let indices: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let incomes: Vec<f64> = monthly.values().map(|b| b.income).collect();
        let expenses: Vec<f64> = monthly.values().map(|b| b.expenses).collect();

        let income_trend = LinearModel::fit(&indices, &incomes);
        let expense_trend = LinearModel::fit(&indices, &expenses);

        let anchor_month = match self.anchor {
            LabelAnchor::Today => MonthKey::from_date(today),
            LabelAnchor::LastObserved => monthly
                .keys()
                .next_back()
                .copied()
                .unwrap_or_else(|| MonthKey::from_date(today)),
        };

        let forecasts: Vec<Forecast> = (1..=self.horizon)
            .map(|i| {
                let x = (n + i as usize - 1) as f64;
                let predicted_income = income_trend.predict(x).max(0.0).round() as i64;
                let predicted_expenses = expense_trend.predict(x).max(0.0).round() as i64;
                let period = anchor_month.plus_months(i);

                Forecast {
                    month: period.month_name().to_string(),
                    period,
                    predicted_income,
                    predicted_expenses,
                    predicted_savings: predicted_income - predicted_expenses,
                }
            })
            .collect();

        debug!(
            months_of_data = n,
            horizon = self.horizon,
            income_slope = income_trend.slope,
            expense_slope = expense_trend.slope,
            "Generated forecasts"
        );

        ForecastReport {
            forecasts,
            confidence: self.confidence.score(n),
            months_of_data: n,
            accuracy: ForecastAccuracy::assess(transactions.len()),
            income_trend,
            expense_trend,
        }
    }
}

/// Forecast `months` ahead with default settings, labeled from the local date
pub fn generate_forecasts(transactions: &[Transaction], months: u32) -> Vec<Forecast> {
    let today = chrono::Local::now().date_naive();
    Forecaster::new()
        .with_horizon(months)
        .forecast(transactions, today)
}

/// Confidence score with default settings
pub fn forecast_confidence(transactions: &[Transaction]) -> f64 {
    Forecaster::new().confidence(transactions)
}
