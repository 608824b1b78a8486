//! Profit CLI - Small-business profit forecasting
//!
//! Usage:
//!   profit summary                    Totals and category breakdown
//!   profit forecast --months 6        Forecast the coming months
//!   profit suggestions --sort-impact  Savings suggestions
//!   profit --file books.csv insights  Dashboard insights for your own data
//!   profit ask "how can I save?"      Answer a question from the data
//!   profit price --margin 40          Selling price for a target margin

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use profit_core::{BulkOrder, ProfitMarginInput, UnitCosts};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    // Calculators don't need transactions, so inputs load on demand
    let inputs = || commands::load_inputs(cli.file.as_deref(), cli.previous.as_deref());
    let config = || commands::load_config(cli.config.as_deref());

    match cli.command {
        Commands::Summary => commands::cmd_summary(&inputs()?, cli.json),
        Commands::Months => commands::cmd_months(&inputs()?, cli.json),
        Commands::Forecast { months, anchor } => commands::cmd_forecast(
            &inputs()?,
            &config()?,
            months,
            anchor.as_deref(),
            commands::today(),
            cli.json,
        ),
        Commands::Suggestions {
            difficulty,
            sort_impact,
        } => commands::cmd_suggestions(
            &inputs()?,
            &config()?,
            difficulty.as_deref(),
            sort_impact,
            cli.json,
        ),
        Commands::Insights => {
            commands::cmd_insights(&inputs()?, &config()?, commands::today(), cli.json)
        }
        Commands::Ask { query } => commands::cmd_ask(
            &inputs()?,
            &config()?,
            &query.join(" "),
            commands::today(),
            cli.json,
        ),
        Commands::Margin {
            price,
            units_sold,
            units_returned,
            product_cost,
            packaging_cost,
            confirmation_fee,
            marketing_cost,
            return_cost,
            fixed_costs,
            orders,
        } => {
            let input = ProfitMarginInput {
                selling_price: price,
                units_sold,
                units_returned,
                product_cost_per_unit: product_cost,
                packaging_cost_per_unit: packaging_cost,
                confirmation_fee_per_unit: confirmation_fee,
                marketing_cost_per_unit: marketing_cost,
                return_cost_per_unit: return_cost,
                fixed_cost_total: fixed_costs,
                orders,
            };
            commands::cmd_margin(&input, cli.json)
        }
        Commands::Price {
            product_cost,
            shipping_cost,
            marketing_cost,
            margin,
        } => {
            let costs = UnitCosts {
                product: product_cost,
                shipping: shipping_cost,
                marketing: marketing_cost,
            };
            commands::cmd_price(&costs, margin, cli.json)
        }
        Commands::Bulk {
            quantity,
            unit_price,
            discount,
            additional_costs,
        } => {
            let order = BulkOrder {
                quantity,
                unit_price,
                discount_percent: discount,
                additional_costs,
            };
            commands::cmd_bulk(&order, cli.json)
        }
    }
}
