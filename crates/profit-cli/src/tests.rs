//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use chrono::NaiveDate;
use profit_core::{
    BulkOrder, Difficulty, EngineConfig, OrderLine, ProfitMarginInput, UnitCosts,
};
use tempfile::NamedTempFile;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{self, cents, money, truncate, Inputs};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
}

fn sample_inputs() -> Inputs {
    commands::load_inputs(None, None).unwrap()
}

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const PREVIOUS_CSV: &str = "id,date,description,amount,category,type
1,2025-03-01,Sales,4000,Income,income
2,2025-03-05,Groceries,-100,Food,expense";

const CURRENT_CSV: &str = "id,date,description,amount,category,type
1,2025-04-01,Sales,4000,Income,income
2,2025-04-05,Groceries,-140,Food,expense
3,2025-04-06,Music,-10,Software,expense
4,2025-04-07,Video,-15,Software,expense
5,2025-04-08,Cloud,-20,Software,expense";

// ========== Input Loading Tests ==========

#[test]
fn test_load_inputs_defaults_to_sample() {
    let inputs = sample_inputs();
    assert_eq!(inputs.current.len(), 8);
    assert!(inputs.previous.is_empty());
    assert_eq!(inputs.source, "sample data");
}

#[test]
fn test_load_inputs_from_files() {
    let current = temp_file(".csv", CURRENT_CSV);
    let previous = temp_file(".csv", PREVIOUS_CSV);

    let inputs = commands::load_inputs(Some(current.path()), Some(previous.path())).unwrap();
    assert_eq!(inputs.current.len(), 5);
    assert_eq!(inputs.previous.len(), 2);
}

#[test]
fn test_load_inputs_missing_file() {
    let result = commands::load_inputs(
        Some(std::path::Path::new("/nonexistent/books.csv")),
        None,
    );
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to load transactions"));
}

#[test]
fn test_load_inputs_bad_date_names_record() {
    let file = temp_file(
        ".json",
        r#"[{"id": "42", "date": "not-a-date", "amount": 10, "category": "Income", "type": "income"}]"#,
    );
    let err = commands::load_inputs(Some(file.path()), None).unwrap_err();
    assert!(format!("{:#}", err).contains("Transaction 42"));
}

#[test]
fn test_load_config_explicit_path() {
    let file = temp_file(".toml", "[forecast]\nhorizon_months = 3\n");
    let config = commands::load_config(Some(file.path())).unwrap();
    assert_eq!(config.forecast.horizon_months, 3);
}

#[test]
fn test_load_config_missing_path() {
    let result = commands::load_config(Some(std::path::Path::new("/nonexistent/engine.toml")));
    assert!(result.is_err());
}

// ========== Command Tests ==========

#[test]
fn test_cmd_summary() {
    let inputs = sample_inputs();
    assert!(commands::cmd_summary(&inputs, false).is_ok());
    assert!(commands::cmd_summary(&inputs, true).is_ok());
}

#[test]
fn test_cmd_summary_empty() {
    let inputs = Inputs::new(vec![], vec![], "empty");
    assert!(commands::cmd_summary(&inputs, false).is_ok());
}

#[test]
fn test_cmd_months() {
    let inputs = sample_inputs();
    assert!(commands::cmd_months(&inputs, false).is_ok());
    assert!(commands::cmd_months(&inputs, true).is_ok());
}

#[test]
fn test_cmd_forecast() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();
    let result = commands::cmd_forecast(&inputs, &config, Some(3), Some("data"), today(), false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_forecast_rejects_bad_months() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();

    let result = commands::cmd_forecast(&inputs, &config, Some(0), None, today(), false);
    assert!(result.is_err());

    let result = commands::cmd_forecast(&inputs, &config, Some(101), None, today(), false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_forecast_rejects_bad_anchor() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();
    let result = commands::cmd_forecast(&inputs, &config, None, Some("tomorrow"), today(), true);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unknown forecast anchor"));
}

#[test]
fn test_build_suggestions_with_previous_period() {
    let current = temp_file(".csv", CURRENT_CSV);
    let previous = temp_file(".csv", PREVIOUS_CSV);
    let inputs = commands::load_inputs(Some(current.path()), Some(previous.path())).unwrap();
    let config = EngineConfig::default();

    let suggestions = commands::build_suggestions(&inputs, &config, None, false).unwrap();
    let titles: Vec<&str> = suggestions.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Reduce Food Spending", "Review Subscriptions"]);
    // Food +40% is past the hard threshold
    assert_eq!(suggestions[0].difficulty, Difficulty::Hard);
    assert_eq!(suggestions[0].impact, 40);

    let easy = commands::build_suggestions(&inputs, &config, Some("easy"), false).unwrap();
    assert_eq!(easy.len(), 1);
    assert_eq!(easy[0].title, "Review Subscriptions");

    let ranked = commands::build_suggestions(&inputs, &config, None, true).unwrap();
    assert!(ranked.windows(2).all(|w| w[0].impact >= w[1].impact));
}

#[test]
fn test_build_suggestions_bad_difficulty() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();
    let result = commands::build_suggestions(&inputs, &config, Some("trivial"), false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_suggestions() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();
    assert!(commands::cmd_suggestions(&inputs, &config, None, true, false).is_ok());
    assert!(commands::cmd_suggestions(&inputs, &config, Some("hard"), false, true).is_ok());
}

#[test]
fn test_cmd_insights() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();
    assert!(commands::cmd_insights(&inputs, &config, today(), false).is_ok());
    assert!(commands::cmd_insights(&inputs, &config, today(), true).is_ok());

    let empty = Inputs::new(vec![], vec![], "empty");
    assert!(commands::cmd_insights(&empty, &config, today(), false).is_ok());
}

#[test]
fn test_cmd_ask() {
    let inputs = sample_inputs();
    let config = EngineConfig::default();
    assert!(commands::cmd_ask(&inputs, &config, "what's my budget?", today(), false).is_ok());
    assert!(commands::cmd_ask(&inputs, &config, "forecast", today(), true).is_ok());
    assert!(commands::cmd_ask(&inputs, &config, "   ", today(), false).is_err());
}

// ========== Calculator Tests ==========

fn shop_input() -> ProfitMarginInput {
    ProfitMarginInput {
        units_sold: 100,
        units_returned: 10,
        product_cost_per_unit: 10.0,
        return_cost_per_unit: 5.0,
        fixed_cost_total: 200.0,
        orders: vec![OrderLine {
            price: 23.0,
            quantity: 100.0,
        }],
        ..Default::default()
    }
}

#[test]
fn test_cmd_margin() {
    assert!(commands::cmd_margin(&shop_input(), false).is_ok());
    assert!(commands::cmd_margin(&shop_input(), true).is_ok());

    // Nothing sold still prints, with n/a ratios
    assert!(commands::cmd_margin(&ProfitMarginInput::default(), false).is_ok());
}

#[test]
fn test_cmd_margin_rejects_negative_cost() {
    let input = ProfitMarginInput {
        marketing_cost_per_unit: -1.0,
        ..shop_input()
    };
    let err = commands::cmd_margin(&input, false).unwrap_err();
    assert!(format!("{:#}", err).contains("marketing_cost_per_unit"));
}

#[test]
fn test_cmd_price() {
    let costs = UnitCosts {
        product: 10.0,
        shipping: 2.0,
        marketing: 1.5,
    };
    assert!(commands::cmd_price(&costs, 40.0, false).is_ok());
    assert!(commands::cmd_price(&costs, 40.0, true).is_ok());
    assert!(commands::cmd_price(&costs, 100.0, false).is_err());
}

#[test]
fn test_cmd_bulk() {
    let order = BulkOrder {
        quantity: 100,
        unit_price: 15.0,
        discount_percent: 10.0,
        additional_costs: 200.0,
    };
    assert!(commands::cmd_bulk(&order, false).is_ok());
    assert!(commands::cmd_bulk(&order, true).is_ok());

    let empty = BulkOrder {
        quantity: 0,
        ..order
    };
    assert!(commands::cmd_bulk(&empty, false).is_err());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_margin_orders() {
    let cli = Cli::try_parse_from([
        "profit",
        "margin",
        "--units-sold",
        "4",
        "--product-cost",
        "3",
        "--order",
        "24.99x3",
        "-o",
        "$20x1",
    ])
    .unwrap();

    match cli.command {
        Commands::Margin {
            orders, units_sold, ..
        } => {
            assert_eq!(units_sold, 4);
            assert_eq!(
                orders,
                vec![
                    OrderLine {
                        price: 24.99,
                        quantity: 3.0
                    },
                    OrderLine {
                        price: 20.0,
                        quantity: 1.0
                    },
                ]
            );
        }
        _ => panic!("expected margin command"),
    }

    let bad = Cli::try_parse_from([
        "profit",
        "margin",
        "--units-sold",
        "1",
        "--product-cost",
        "1",
        "--order",
        "abc",
    ]);
    assert!(bad.is_err());
}

#[test]
fn test_parse_price_defaults() {
    let cli = Cli::try_parse_from(["profit", "price"]).unwrap();
    match cli.command {
        Commands::Price {
            product_cost,
            shipping_cost,
            marketing_cost,
            margin,
        } => {
            assert_eq!(product_cost, 10.0);
            assert_eq!(shipping_cost, 2.0);
            assert_eq!(marketing_cost, 1.5);
            assert_eq!(margin, 40.0);
        }
        _ => panic!("expected price command"),
    }
}

#[test]
fn test_parse_ask_joins_words() {
    let cli = Cli::try_parse_from(["profit", "ask", "how", "do", "I", "save"]).unwrap();
    match cli.command {
        Commands::Ask { query } => assert_eq!(query.join(" "), "how do I save"),
        _ => panic!("expected ask command"),
    }
    assert!(Cli::try_parse_from(["profit", "ask"]).is_err());
}

// ========== Formatting Tests ==========

#[test]
fn test_money() {
    assert_eq!(money(0), "$0");
    assert_eq!(money(999), "$999");
    assert_eq!(money(4805), "$4,805");
    assert_eq!(money(1234567), "$1,234,567");
    assert_eq!(money(-1500), "-$1,500");
}

#[test]
fn test_cents() {
    assert_eq!(cents(22.5), "$22.50");
    assert_eq!(cents(1550.0), "$1,550.00");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("Food", 10), "Food");
    assert_eq!(truncate("Office Supplies and Equipment", 10), "Office ...");
}
