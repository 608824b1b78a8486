//! Built-in sample data set
//!
//! One month (April 2025) of a small business: 6800 income, 1995 expenses.
//! Used when no transaction file is supplied.

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionType};

const SAMPLE: &[(&str, (i32, u32, u32), &str, f64, &str, TransactionType)] = &[
    ("1", (2025, 4, 1), "Salary", 5000.0, "Income", TransactionType::Income),
    ("2", (2025, 4, 2), "Rent", -1500.0, "Housing", TransactionType::Expense),
    ("3", (2025, 4, 3), "Grocery Shopping", -200.0, "Food", TransactionType::Expense),
    ("4", (2025, 4, 5), "Freelance Work", 800.0, "Income", TransactionType::Income),
    ("5", (2025, 4, 7), "Utilities", -150.0, "Bills", TransactionType::Expense),
    ("6", (2025, 4, 10), "Restaurant Dinner", -85.0, "Food", TransactionType::Expense),
    ("7", (2025, 4, 15), "Bonus", 1000.0, "Income", TransactionType::Income),
    ("8", (2025, 4, 18), "Gas", -60.0, "Transportation", TransactionType::Expense),
];

/// The sample transactions
pub fn sample_transactions() -> Vec<Transaction> {
    SAMPLE
        .iter()
        .filter_map(|(id, (y, m, d), description, amount, category, kind)| {
            Some(Transaction {
                id: id.to_string(),
                date: NaiveDate::from_ymd_opt(*y, *m, *d)?,
                description: description.to_string(),
                amount: *amount,
                category: category.to_string(),
                kind: *kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{total_expenses, total_income};

    #[test]
    fn test_sample_totals() {
        let txs = sample_transactions();
        assert_eq!(txs.len(), 8);
        assert_eq!(total_income(&txs), 6800.0);
        assert_eq!(total_expenses(&txs), 1995.0);
    }
}
