//! Rule-based savings suggestions
//!
//! Rules run independently and in a fixed order:
//! 1. Category spend increase vs the previous period
//! 2. Many small recurring charges (likely subscriptions)
//! 3. Food spending above a share of income
//! 4. Savings below a share of expenses (emergency fund)
//!
//! Output is in rule order. Use [`sort_by_impact`] and [`filter_by_difficulty`]
//! for ranking.

use tracing::debug;

use crate::aggregate::{category_breakdown, total_expenses, total_income};
use crate::config::SuggestionThresholds;
use crate::models::{Difficulty, Suggestion, Transaction};

/// Generates suggestions from current and previous-period transactions
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    thresholds: SuggestionThresholds,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: SuggestionThresholds) -> Self {
        Self { thresholds }
    }

    /// Run every rule; `previous` may be empty, which disables rule 1
    pub fn generate(&self, current: &[Transaction], previous: &[Transaction]) -> Vec<Suggestion> {
        let mut builder = SuggestionList::default();

        self.category_increases(current, previous, &mut builder);
        self.small_recurring_charges(current, &mut builder);
        self.food_budget(current, &mut builder);
        self.emergency_fund(current, &mut builder);

        debug!(
            current = current.len(),
            previous = previous.len(),
            suggestions = builder.items.len(),
            "Generated suggestions"
        );
        builder.items
    }

    fn category_increases(
        &self,
        current: &[Transaction],
        previous: &[Transaction],
        out: &mut SuggestionList,
    ) {
        if previous.is_empty() {
            return;
        }

        let current_breakdown = category_breakdown(current);
        let previous_breakdown = category_breakdown(previous);

        for (category, &amount) in &current_breakdown {
            let previous_amount = previous_breakdown.get(category).copied().unwrap_or(0.0);
            if previous_amount <= 0.0 || amount <= previous_amount {
                continue;
            }

            let increase = (amount - previous_amount) / previous_amount;
            if increase <= self.thresholds.category_increase_ratio {
                continue;
            }

            let difficulty = if increase > self.thresholds.category_increase_hard_ratio {
                Difficulty::Hard
            } else {
                Difficulty::Medium
            };

            out.push(
                format!("Reduce {} Spending", category),
                format!(
                    "Your {} expenses have increased by {:.0}% compared to last month. \
                     Consider reviewing your spending in this category.",
                    category,
                    increase * 100.0
                ),
                amount - previous_amount,
                category.clone(),
                difficulty,
            );
        }
    }

    fn small_recurring_charges(&self, current: &[Transaction], out: &mut SuggestionList) {
        let t = &self.thresholds;
        let small: Vec<f64> = current
            .iter()
            .filter(|tx| tx.is_expense())
            .map(|tx| tx.amount.abs())
            .filter(|amount| *amount > t.small_charge_min && *amount < t.small_charge_max)
            .collect();

        if small.len() < t.small_charge_min_count {
            return;
        }

        let total: f64 = small.iter().sum();
        out.push(
            "Review Subscriptions",
            "You appear to have multiple small recurring charges. Review your subscriptions \
             and consider canceling unused services.",
            total * t.small_charge_savings_ratio,
            "Subscriptions",
            Difficulty::Easy,
        );
    }

    fn food_budget(&self, current: &[Transaction], out: &mut SuggestionList) {
        let t = &self.thresholds;
        let food: f64 = current
            .iter()
            .filter(|tx| tx.is_expense() && tx.category.to_lowercase().contains("food"))
            .map(|tx| tx.amount.abs())
            .sum();

        if food <= total_income(current) * t.food_income_ratio {
            return;
        }

        out.push(
            "Optimize Food Budget",
            format!(
                "Your food expenses are more than {:.0}% of your income. Consider meal planning \
                 and grocery shopping with a list to reduce costs.",
                t.food_income_ratio * 100.0
            ),
            food * t.food_savings_ratio,
            "Food",
            Difficulty::Medium,
        );
    }

    fn emergency_fund(&self, current: &[Transaction], out: &mut SuggestionList) {
        let t = &self.thresholds;
        let expenses = total_expenses(current);
        let savings = total_income(current) - expenses;

        if savings >= expenses * t.emergency_fund_ratio {
            return;
        }

        out.push(
            "Build Emergency Fund",
            format!(
                "Your current savings rate is low. Aim to save at least {:.0}% of your income \
                 for emergencies.",
                t.emergency_fund_ratio * 100.0
            ),
            expenses * t.emergency_fund_ratio,
            "Savings",
            Difficulty::Hard,
        );
    }
}

/// Accumulates suggestions and hands out sequential ids
#[derive(Default)]
struct SuggestionList {
    items: Vec<Suggestion>,
}

impl SuggestionList {
    fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        impact: f64,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) {
        let id = (self.items.len() + 1).to_string();
        self.items.push(Suggestion {
            id,
            title: title.into(),
            description: description.into(),
            impact: impact.max(0.0).round() as i64,
            category: category.into(),
            difficulty,
        });
    }
}

/// Generate suggestions with the default thresholds
pub fn generate_suggestions(
    current: &[Transaction],
    previous: Option<&[Transaction]>,
) -> Vec<Suggestion> {
    SuggestionEngine::new().generate(current, previous.unwrap_or(&[]))
}

/// Highest impact first; ties keep their rule order
pub fn sort_by_impact(suggestions: &[Suggestion]) -> Vec<Suggestion> {
    let mut sorted = suggestions.to_vec();
    sorted.sort_by(|a, b| b.impact.cmp(&a.impact));
    sorted
}

pub fn filter_by_difficulty(suggestions: &[Suggestion], difficulty: Difficulty) -> Vec<Suggestion> {
    suggestions
        .iter()
        .filter(|s| s.difficulty == difficulty)
        .cloned()
        .collect()
}
