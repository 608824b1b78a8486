//! Forecast command implementation

use anyhow::Result;
use chrono::NaiveDate;
use profit_core::{EngineConfig, Forecaster, LabelAnchor};

use super::{money, print_json, Inputs};

/// Forecasts can't reach further out than this
const MAX_FORECAST_MONTHS: u32 = 100;

pub fn cmd_forecast(
    inputs: &Inputs,
    config: &EngineConfig,
    months: Option<u32>,
    anchor: Option<&str>,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let mut forecaster = Forecaster::from_config(&config.forecast);

    if let Some(months) = months {
        if months == 0 || months > MAX_FORECAST_MONTHS {
            anyhow::bail!(
                "--months must be between 1 and {} (got {})",
                MAX_FORECAST_MONTHS,
                months
            );
        }
        forecaster = forecaster.with_horizon(months);
    }

    if let Some(anchor) = anchor {
        let anchor: LabelAnchor = anchor.parse().map_err(anyhow::Error::msg)?;
        forecaster = forecaster.with_anchor(anchor);
    }

    let report = forecaster.report(&inputs.current, today);

    if json {
        return print_json(&report);
    }

    println!();
    println!("🔮 {}-Month Forecast", forecaster.horizon());
    println!("   Source: {}", inputs.source);
    println!("   ─────────────────────────────────────────────────────");
    println!(
        "   {:12} │ {:>12} │ {:>12} │ {:>12}",
        "Month", "Income", "Expenses", "Savings"
    );
    println!("   ─────────────┼──────────────┼──────────────┼──────────────");

    for f in &report.forecasts {
        let marker = if f.predicted_savings < 0 { " ⚠️" } else { "" };
        println!(
            "   {:12} │ {:>12} │ {:>12} │ {:>12}{}",
            f.month,
            money(f.predicted_income),
            money(f.predicted_expenses),
            money(f.predicted_savings),
            marker
        );
    }

    println!();
    println!(
        "   Confidence: {:.0}% ({} months of history)",
        report.confidence * 100.0,
        report.months_of_data
    );
    println!("   {}", report.accuracy.message());

    Ok(())
}
