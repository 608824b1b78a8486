//! Keyword-driven answers to free-form finance questions
//!
//! The question is matched against a few keywords and answered from the
//! same numbers the rest of the engine produces. No model is involved and the
//! same question over the same data always yields the same answer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{group_by_month, percent_change, FinancialSummary};
use crate::config::EngineConfig;
use crate::forecast::Forecaster;
use crate::models::Transaction;
use crate::suggestions::{sort_by_impact, SuggestionEngine};

/// What a question is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryIntent {
    Save,
    Invest,
    Budget,
    Forecast,
    General,
}

impl QueryIntent {
    /// First matching keyword group wins: save, invest, budget, trend/forecast
    pub fn detect(query: &str) -> Self {
        let query = query.to_lowercase();

        if query.contains("save") || query.contains("saving") {
            Self::Save
        } else if query.contains("invest") {
            Self::Invest
        } else if query.contains("budget") {
            Self::Budget
        } else if query.contains("trend") || query.contains("forecast") {
            Self::Forecast
        } else {
            Self::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Invest => "invest",
            Self::Budget => "budget",
            Self::Forecast => "forecast",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An answer and the intent it was chosen for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub intent: QueryIntent,
    pub text: String,
}

/// Answers questions using the configured engine
pub struct QueryResponder<'a> {
    config: &'a EngineConfig,
    today: NaiveDate,
}

impl<'a> QueryResponder<'a> {
    pub fn new(config: &'a EngineConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    pub fn answer(
        &self,
        query: &str,
        current: &[Transaction],
        previous: &[Transaction],
    ) -> Answer {
        let intent = QueryIntent::detect(query);
        let text = match intent {
            QueryIntent::Save => self.saving_tip(current, previous),
            QueryIntent::Invest => Self::investing(current),
            QueryIntent::Budget => Self::budget(current),
            QueryIntent::Forecast => self.outlook(current),
            QueryIntent::General => "I can help you analyze your finances, identify savings \
                                     opportunities, or create budget forecasts. What specific \
                                     aspect are you interested in?"
                .to_string(),
        };

        tracing::debug!(intent = intent.as_str(), "Answered query");
        Answer { intent, text }
    }

    fn saving_tip(&self, current: &[Transaction], previous: &[Transaction]) -> String {
        let engine = SuggestionEngine::with_thresholds(self.config.suggestions.clone());
        let ranked = sort_by_impact(&engine.generate(current, previous));

        match ranked.first() {
            Some(top) => format!(
                "Here's a saving tip: {} (worth about {}/month)",
                top.description,
                format_currency(top.impact as f64)
            ),
            None => "To save more, consider reviewing your highest expense categories and \
                     find areas to reduce spending."
                .to_string(),
        }
    }

    fn investing(current: &[Transaction]) -> String {
        let portfolio = "a diversified portfolio with 70% index funds, 20% bonds, and 10% cash \
                         reserves might align with your goals.";
        let summary = FinancialSummary::from_transactions(current);

        if summary.net_profit > 0.0 {
            format!(
                "You're keeping {:.1}% of your income. Based on your financial profile, {}",
                summary.savings_rate, portfolio
            )
        } else {
            format!(
                "Build a cash buffer before investing: your expenses currently match or exceed \
                 your income. Once you're saving regularly, {}",
                portfolio
            )
        }
    }

    fn budget(current: &[Transaction]) -> String {
        let summary = FinancialSummary::from_transactions(current);
        let mut text = format!(
            "Your current budget shows {} income and {} expenses.",
            format_currency(summary.total_income),
            format_currency(summary.total_expenses)
        );

        if let Some((category, amount)) = summary.top_categories().first() {
            if summary.total_expenses > 0.0 {
                text.push_str(&format!(
                    " {} is your largest expense category at {:.0}% of total expenses.",
                    category,
                    amount / summary.total_expenses * 100.0
                ));
            }
        }
        text
    }

    fn outlook(&self, current: &[Transaction]) -> String {
        let monthly = group_by_month(current);
        let Some(last) = monthly.values().next_back() else {
            return "Add some transactions and I can project your income and expenses."
                .to_string();
        };

        let forecaster = Forecaster::from_config(&self.config.forecast);
        let report = forecaster.report(current, self.today);
        let Some(end) = report.forecasts.last() else {
            return "Set a forecast horizon of at least one month to see a projection."
                .to_string();
        };

        let income_change = percent_change(end.predicted_income as f64, last.income);
        let expense_change = percent_change(end.predicted_expenses as f64, last.expenses);

        format!(
            "Based on your historical data, I project your income will {} over the next {} \
             months, while expenses {}.",
            describe_change(income_change),
            forecaster.horizon(),
            describe_change(expense_change)
        )
    }
}

/// Changes within ±5% read as stable
fn describe_change(percent: f64) -> String {
    if percent.abs() < 5.0 {
        "remain stable".to_string()
    } else if percent > 0.0 {
        format!("increase by approximately {:.0}%", percent)
    } else {
        format!("decrease by approximately {:.0}%", percent.abs())
    }
}

/// US dollar amount with cents and thousands separators, e.g. `$6,800.00`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
