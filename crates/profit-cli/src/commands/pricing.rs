//! Unit-economics command implementations (margin, price, bulk)

use anyhow::{Context, Result};
use profit_core::{
    calculate_profit_margin, quote_bulk_order, quote_price, BulkOrder, ProfitMarginInput,
    UnitCosts,
};

use super::{cents, print_json};

pub fn cmd_margin(input: &ProfitMarginInput, json: bool) -> Result<()> {
    let report = calculate_profit_margin(input).context("Invalid profit margin input")?;

    if json {
        return print_json(&report);
    }

    let percent = |value: Option<f64>| match value {
        Some(v) => format!("{:.2}%", v),
        None => "n/a".to_string(),
    };

    println!();
    println!("📈 Profit Margin");
    println!("   ─────────────────────────────────────────");
    println!("   Revenue:               {:>14}", cents(report.total_revenue));
    println!("   Variable cost / unit:  {:>14}", cents(report.unit_variable_cost));
    println!("   Product costs:         {:>14}", cents(report.total_product_cost));
    println!("   Return costs:          {:>14}", cents(report.total_return_cost));
    println!("   Fixed costs:           {:>14}", cents(input.fixed_cost_total));
    println!("   ─────────────────────────────────────────");
    println!("   Total costs:           {:>14}", cents(report.total_costs));
    println!("   Profit:                {:>14}", cents(report.total_profit));
    println!("   Profit margin:         {:>14}", percent(report.profit_margin));
    println!("   Return rate:           {:>14}", percent(report.return_rate));
    if let Some(fixed) = report.fixed_cost_per_unit {
        println!("   Fixed cost / unit:     {:>14}", cents(fixed));
    }

    if report.total_profit < 0.0 {
        println!();
        println!("   ⚠️  Costs exceed revenue at these volumes.");
    }

    Ok(())
}

pub fn cmd_price(costs: &UnitCosts, margin: f64, json: bool) -> Result<()> {
    let quote = quote_price(costs, margin).context("Cannot price for this margin")?;

    if json {
        return print_json(&quote);
    }

    println!();
    println!("🏷️  Selling Price");
    println!("   ─────────────────────────────────────────");
    println!("   Product cost:          {:>14}", cents(costs.product));
    println!("   Shipping cost:         {:>14}", cents(costs.shipping));
    println!("   Marketing cost:        {:>14}", cents(costs.marketing));
    println!("   Total cost:            {:>14}", cents(quote.total_cost));
    println!("   ─────────────────────────────────────────");
    println!("   Target margin:         {:>13.1}%", quote.desired_margin);
    println!("   Selling price:         {:>14}", cents(quote.selling_price));
    println!("   Actual margin:         {:>13.2}%", quote.actual_margin);

    Ok(())
}

pub fn cmd_bulk(order: &BulkOrder, json: bool) -> Result<()> {
    let quote = quote_bulk_order(order).context("Invalid bulk order")?;

    if json {
        return print_json(&quote);
    }

    println!();
    println!("📦 Bulk Order");
    println!("   ─────────────────────────────────────────");
    println!(
        "   {} units at {} ({}% off)",
        order.quantity,
        cents(order.unit_price),
        order.discount_percent
    );
    println!("   Regular total:         {:>14}", cents(quote.regular_total));
    println!("   Additional costs:      {:>14}", cents(order.additional_costs));
    println!("   Total cost:            {:>14}", cents(quote.total_cost));
    println!("   Cost per unit:         {:>14}", cents(quote.unit_cost));
    match quote.savings_percent {
        Some(pct) => println!(
            "   Discount savings:      {:>14} ({:.1}%)",
            cents(quote.savings),
            pct
        ),
        None => println!("   Discount savings:      {:>14}", cents(quote.savings)),
    }

    Ok(())
}
