//! Suggestion command implementation

use anyhow::Result;
use profit_core::{
    filter_by_difficulty, sort_by_impact, Difficulty, EngineConfig, Suggestion, SuggestionEngine,
};

use super::{money, print_json, truncate, Inputs};

/// Run the suggestion rules and apply the requested filter and ordering
pub fn build_suggestions(
    inputs: &Inputs,
    config: &EngineConfig,
    difficulty: Option<&str>,
    sort_impact: bool,
) -> Result<Vec<Suggestion>> {
    let engine = SuggestionEngine::with_thresholds(config.suggestions.clone());
    let mut suggestions = engine.generate(&inputs.current, &inputs.previous);

    if let Some(difficulty) = difficulty {
        let difficulty: Difficulty = difficulty.parse().map_err(anyhow::Error::msg)?;
        suggestions = filter_by_difficulty(&suggestions, difficulty);
    }

    if sort_impact {
        suggestions = sort_by_impact(&suggestions);
    }

    Ok(suggestions)
}

pub fn cmd_suggestions(
    inputs: &Inputs,
    config: &EngineConfig,
    difficulty: Option<&str>,
    sort_impact: bool,
    json: bool,
) -> Result<()> {
    let suggestions = build_suggestions(inputs, config, difficulty, sort_impact)?;

    if json {
        return print_json(&suggestions);
    }

    println!();
    println!("💡 Savings Suggestions");
    println!("   Source: {}", inputs.source);
    if inputs.previous.is_empty() {
        println!("   Tip: pass --previous to compare against last month");
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if suggestions.is_empty() {
        println!("   ✅ No suggestions. Your spending looks healthy!");
        return Ok(());
    }

    let total: i64 = suggestions.iter().map(|s| s.impact).sum();

    for s in &suggestions {
        let icon = match s.difficulty {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
        };
        println!(
            "   {} {:28} │ {:>8}/mo │ {:6} │ {}",
            icon,
            truncate(&s.title, 28),
            money(s.impact),
            s.difficulty,
            s.category
        );
        println!("      {}", s.description);
    }

    println!();
    println!("   Potential savings: {}/month", money(total));

    Ok(())
}
