//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use profit_core::OrderLine;

/// Profit Assistant - Forecast profit and find savings
#[derive(Parser)]
#[command(name = "profit")]
#[command(about = "Small-business profit forecasting and savings suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transactions file (JSON or CSV)
    ///
    /// When omitted, the built-in sample data set is used.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Previous-period transactions file for month-over-month comparisons
    #[arg(long, global = true)]
    pub previous: Option<PathBuf>,

    /// Engine config file (TOML)
    ///
    /// Defaults to ~/.local/share/profit-assistant/config/engine.toml if it
    /// exists, otherwise the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show totals, net profit, savings rate and category breakdown
    Summary,

    /// Show income, expenses and savings per month
    Months,

    /// Forecast income, expenses and savings for the coming months
    Forecast {
        /// Number of months to forecast (defaults to the config value)
        #[arg(short, long)]
        months: Option<u32>,

        /// Label anchor: today (wall clock) or data (last observed month)
        #[arg(long)]
        anchor: Option<String>,
    },

    /// Show savings suggestions
    Suggestions {
        /// Only show suggestions of this difficulty: easy, medium, hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Rank by monthly impact instead of rule order
        #[arg(long)]
        sort_impact: bool,
    },

    /// Run every insight analyzer and list the findings
    Insights,

    /// Ask a question about your finances (save, invest, budget, forecast)
    Ask {
        /// The question, e.g. "how can I save more?"
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Calculate profit and margin from unit economics
    Margin {
        /// Average selling price per unit after discounts
        #[arg(short, long, default_value_t = 0.0)]
        price: f64,

        /// Units sold (before returns)
        #[arg(short, long)]
        units_sold: u64,

        /// Units returned
        #[arg(long, default_value_t = 0)]
        units_returned: u64,

        /// Product cost per unit
        #[arg(long)]
        product_cost: f64,

        /// Packaging cost per unit
        #[arg(long, default_value_t = 0.0)]
        packaging_cost: f64,

        /// Order confirmation fee per unit
        #[arg(long, default_value_t = 0.0)]
        confirmation_fee: f64,

        /// Marketing cost per unit
        #[arg(long, default_value_t = 0.0)]
        marketing_cost: f64,

        /// Handling cost per returned unit
        #[arg(long, default_value_t = 0.0)]
        return_cost: f64,

        /// Fixed costs for the period
        #[arg(long, default_value_t = 0.0)]
        fixed_costs: f64,

        /// Order line as PRICExQTY (repeatable); replaces price × units sold for revenue
        #[arg(short, long = "order")]
        orders: Vec<OrderLine>,
    },

    /// Selling price needed to reach a target margin
    Price {
        /// Product cost per unit
        #[arg(long, default_value_t = 10.0)]
        product_cost: f64,

        /// Shipping cost per unit
        #[arg(long, default_value_t = 2.0)]
        shipping_cost: f64,

        /// Marketing cost per unit
        #[arg(long, default_value_t = 1.5)]
        marketing_cost: f64,

        /// Target margin in percent of the selling price (below 100)
        #[arg(short, long, default_value_t = 40.0)]
        margin: f64,
    },

    /// Total and per-unit cost of a discounted bulk purchase
    Bulk {
        /// Units to buy
        #[arg(short, long, default_value_t = 100)]
        quantity: u64,

        /// Regular price per unit
        #[arg(long, default_value_t = 15.0)]
        unit_price: f64,

        /// Bulk discount in percent
        #[arg(short, long, default_value_t = 10.0)]
        discount: f64,

        /// Extra costs for the order (shipping, handling)
        #[arg(short, long, default_value_t = 200.0)]
        additional_costs: f64,
    },
}
