//! Summary and monthly breakdown commands

use anyhow::Result;
use profit_core::{group_by_month, FinancialSummary};

use super::{print_json, truncate, Inputs};

pub fn cmd_summary(inputs: &Inputs, json: bool) -> Result<()> {
    let summary = FinancialSummary::from_transactions(&inputs.current);

    if json {
        return print_json(&summary);
    }

    println!();
    println!("📊 Financial Summary");
    println!("   Source: {}", inputs.source);
    println!("   ─────────────────────────────────────────────");

    if inputs.current.is_empty() {
        println!("   No transactions found.");
        return Ok(());
    }

    println!("   Income:        ${:>12.2}", summary.total_income);
    println!("   Expenses:      ${:>12.2}", summary.total_expenses);
    let icon = if summary.net_profit >= 0.0 { "✅" } else { "⚠️ " };
    println!(
        "   Net profit:    ${:>12.2}  {}",
        summary.net_profit, icon
    );
    println!("   Savings rate:   {:>12.1}%", summary.savings_rate);

    let categories = summary.top_categories();
    if categories.is_empty() {
        return Ok(());
    }

    println!();
    println!("   {:25} │ {:>10} │ {:>6}", "Category", "Amount", "%");
    println!("   ──────────────────────────┼────────────┼────────");
    for (category, amount) in categories {
        let share = if summary.total_expenses > 0.0 {
            amount / summary.total_expenses * 100.0
        } else {
            0.0
        };
        println!(
            "   {:25} │ {:>10.2} │ {:>5.1}%",
            truncate(category, 25),
            amount,
            share
        );
    }

    Ok(())
}

pub fn cmd_months(inputs: &Inputs, json: bool) -> Result<()> {
    let buckets = group_by_month(&inputs.current);

    if json {
        return print_json(&buckets);
    }

    println!();
    println!("📅 Monthly Breakdown");
    println!("   Source: {}", inputs.source);
    println!("   ─────────────────────────────────────────────────────");

    if buckets.is_empty() {
        println!("   No transactions found.");
        return Ok(());
    }

    println!(
        "   {:8} │ {:>12} │ {:>12} │ {:>12}",
        "Month", "Income", "Expenses", "Savings"
    );
    println!("   ─────────┼──────────────┼──────────────┼──────────────");
    for (month, bucket) in &buckets {
        println!(
            "   {:8} │ {:>12.2} │ {:>12.2} │ {:>12.2}",
            month.to_string(),
            bucket.income,
            bucket.expenses,
            bucket.savings
        );
    }

    Ok(())
}
