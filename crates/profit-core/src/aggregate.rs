//! Monthly and per-category aggregation of transactions
//!
//! Everything here is a pure fold over the input slice. Maps are `BTreeMap`s
//! so iteration order is chronological for months and alphabetical for
//! categories, independent of input order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{MonthBucket, MonthKey, Transaction};

/// Group transactions into calendar-month buckets
pub fn group_by_month(transactions: &[Transaction]) -> BTreeMap<MonthKey, MonthBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();

    for tx in transactions {
        buckets
            .entry(MonthKey::from_date(tx.date))
            .or_default()
            .add(tx);
    }

    debug!(
        transactions = transactions.len(),
        months = buckets.len(),
        "Grouped transactions by month"
    );
    buckets
}

/// Expense totals per category (absolute values)
///
/// Categories that only carry income are left out.
pub fn category_breakdown(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut breakdown: BTreeMap<String, f64> = BTreeMap::new();

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *breakdown.entry(tx.category.clone()).or_insert(0.0) += tx.amount.abs();
    }

    breakdown
}

pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum()
}

/// Percent change from `previous` to `current`, 0 when there is no baseline
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Headline numbers for a set of transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses
    pub net_profit: f64,
    /// Net profit as a percentage of income (0 when there is no income)
    pub savings_rate: f64,
    pub categories: BTreeMap<String, f64>,
}

impl FinancialSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_income = total_income(transactions);
        let total_expenses = total_expenses(transactions);
        let net_profit = total_income - total_expenses;
        let savings_rate = if total_income == 0.0 {
            0.0
        } else {
            net_profit / total_income * 100.0
        };

        Self {
            total_income,
            total_expenses,
            net_profit,
            savings_rate,
            categories: category_breakdown(transactions),
        }
    }

    /// Expense categories sorted by amount, largest first
    pub fn top_categories(&self) -> Vec<(&str, f64)> {
        let mut sorted: Vec<(&str, f64)> = self
            .categories
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }
}
