//! Insights command implementation

use anyhow::Result;
use chrono::NaiveDate;
use profit_core::insights::Severity;
use profit_core::{AnalysisContext, EngineConfig, InsightEngine};

use super::{print_json, Inputs};

pub fn cmd_insights(
    inputs: &Inputs,
    config: &EngineConfig,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let engine = InsightEngine::new();
    let ctx = AnalysisContext::new(&inputs.current, &inputs.previous, today, config);
    let findings = engine.analyze_all(&ctx);

    if json {
        return print_json(&findings);
    }

    println!();
    println!("🧠 Insights");
    println!("   Source: {}", inputs.source);
    println!("   ─────────────────────────────────────────────────────────────");

    if findings.is_empty() {
        println!("   No insights yet. Add some transactions first.");
        return Ok(());
    }

    for finding in &findings {
        let icon = match finding.severity {
            Severity::Alert => "🚨",
            Severity::Warning => "⚠️ ",
            Severity::Attention => "👀",
            Severity::Info => "ℹ️ ",
        };
        println!("   {} {}: {}", icon, finding.title, finding.summary);
        if let Some(ref detail) = finding.detail {
            println!("      {}", detail);
        }
    }

    Ok(())
}
