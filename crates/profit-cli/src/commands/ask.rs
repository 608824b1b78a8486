//! Ask command implementation

use anyhow::Result;
use chrono::NaiveDate;
use profit_core::{EngineConfig, QueryResponder};

use super::{print_json, Inputs};

pub fn cmd_ask(
    inputs: &Inputs,
    config: &EngineConfig,
    query: &str,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("Ask a question, e.g. profit ask \"how can I save more?\"");
    }

    let answer =
        QueryResponder::new(config, today).answer(query, &inputs.current, &inputs.previous);

    if json {
        return print_json(&answer);
    }

    println!();
    println!("💬 {}", query.trim());
    println!("   Source: {}", inputs.source);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {}", answer.text);

    Ok(())
}
