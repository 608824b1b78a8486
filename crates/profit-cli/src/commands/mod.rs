//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `summary` - Totals, category breakdown and monthly buckets
//! - `forecast` - Forecast table with confidence and accuracy
//! - `suggestions` - Savings suggestions
//! - `insights` - Insight engine findings
//! - `ask` - Keyword-driven answers to questions
//! - `pricing` - Profit margin, selling price and bulk order calculators
//!
//! Shared utilities (input loading, config, formatting) live here.

pub mod ask;
pub mod forecast;
pub mod insights;
pub mod pricing;
pub mod suggestions;
pub mod summary;

// Re-export command functions for main.rs
pub use ask::*;
pub use forecast::*;
pub use insights::*;
pub use pricing::*;
pub use suggestions::*;
pub use summary::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use profit_core::{load_transactions, sample_transactions, EngineConfig, Transaction};
use tracing::info;

/// Transactions the commands operate on
#[derive(Debug)]
pub struct Inputs {
    /// Period being analyzed
    pub current: Vec<Transaction>,
    /// Comparison period (empty when not given)
    pub previous: Vec<Transaction>,
    /// Where `current` came from, for headers
    pub source: String,
}

impl Inputs {
    pub fn new(current: Vec<Transaction>, previous: Vec<Transaction>, source: &str) -> Self {
        Self {
            current,
            previous,
            source: source.to_string(),
        }
    }
}

/// Load the current period from `file` (or the sample data) and the optional previous period
pub fn load_inputs(file: Option<&Path>, previous: Option<&Path>) -> Result<Inputs> {
    let (current, source) = match file {
        Some(path) => {
            let txs = load_transactions(path)
                .with_context(|| format!("Failed to load transactions from {}", path.display()))?;
            (txs, path.display().to_string())
        }
        None => (sample_transactions(), "sample data".to_string()),
    };

    let previous = match previous {
        Some(path) => load_transactions(path).with_context(|| {
            format!(
                "Failed to load previous-period transactions from {}",
                path.display()
            )
        })?,
        None => Vec::new(),
    };

    info!(
        "Loaded {} transactions from {} ({} in previous period)",
        current.len(),
        source,
        previous.len()
    );

    Ok(Inputs::new(current, previous, &source))
}

/// Load engine config from an explicit path, the override file, or the defaults
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    EngineConfig::load(path).context("Failed to load engine config")
}

/// Local wall-clock date used for forecast labels
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Format a whole-unit amount with thousands separators, e.g. `-$1,234`
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format an amount with cents, e.g. `$1,234.50`
pub fn cents(amount: f64) -> String {
    profit_core::assistant::format_currency(amount)
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
