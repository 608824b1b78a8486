//! Engine configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/profit-assistant/config/engine.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::forecast::{ConfidenceModel, LabelAnchor};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/engine.toml");

/// Forecaster settings
///
/// Serializes to the same flat layout as the `[forecast]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub horizon_months: u32,
    pub anchor: LabelAnchor,
    #[serde(flatten)]
    pub confidence: ConfidenceModel,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_months: 6,
            anchor: LabelAnchor::Today,
            confidence: ConfidenceModel::default(),
        }
    }
}

/// Thresholds for the suggestion rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionThresholds {
    pub category_increase_ratio: f64,
    pub category_increase_hard_ratio: f64,
    pub small_charge_min: f64,
    pub small_charge_max: f64,
    pub small_charge_min_count: usize,
    pub small_charge_savings_ratio: f64,
    pub food_income_ratio: f64,
    pub food_savings_ratio: f64,
    pub emergency_fund_ratio: f64,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            category_increase_ratio: 0.15,
            category_increase_hard_ratio: 0.30,
            small_charge_min: 5.0,
            small_charge_max: 50.0,
            small_charge_min_count: 3,
            small_charge_savings_ratio: 0.3,
            food_income_ratio: 0.2,
            food_savings_ratio: 0.2,
            emergency_fund_ratio: 0.1,
        }
    }
}

/// Thresholds for the insight analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Category changes within ±this percent are stable
    pub trend_stable_band: f64,
    /// Category increases above this percent need attention
    pub trend_attention_increase: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            trend_stable_band: 5.0,
            trend_attention_increase: 30.0,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub forecast: ForecastConfig,
    pub suggestions: SuggestionThresholds,
    pub insights: InsightThresholds,
}

impl EngineConfig {
    /// Load config from an explicit path, the data-dir override, or the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::InvalidData(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!(path = %path.display(), "Loading engine config");
                fs::read_to_string(path)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(default_path) => {
                    debug!(path = %default_path.display(), "Loading engine config override");
                    fs::read_to_string(&default_path)?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// The embedded default config
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("profit-assistant").join("config").join("engine.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    forecast: Option<RawForecast>,
    suggestions: Option<RawSuggestions>,
    insights: Option<RawInsights>,
}

#[derive(Debug, Deserialize)]
struct RawForecast {
    horizon_months: Option<u32>,
    anchor: Option<String>,
    confidence_base: Option<f64>,
    confidence_step: Option<f64>,
    confidence_cap: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestions {
    category_increase_ratio: Option<f64>,
    category_increase_hard_ratio: Option<f64>,
    small_charge_min: Option<f64>,
    small_charge_max: Option<f64>,
    small_charge_min_count: Option<usize>,
    small_charge_savings_ratio: Option<f64>,
    food_income_ratio: Option<f64>,
    food_savings_ratio: Option<f64>,
    emergency_fund_ratio: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    trend_stable_band: Option<f64>,
    trend_attention_increase: Option<f64>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut config = EngineConfig::default();

    if let Some(forecast) = raw.forecast {
        if let Some(horizon) = forecast.horizon_months {
            if horizon == 0 {
                return Err(Error::InvalidData(
                    "forecast.horizon_months must be at least 1".into(),
                ));
            }
            config.forecast.horizon_months = horizon;
        }
        if let Some(anchor) = forecast.anchor {
            config.forecast.anchor = anchor.parse().map_err(Error::InvalidData)?;
        }
        let confidence = &mut config.forecast.confidence;
        if let Some(base) = forecast.confidence_base {
            confidence.base = base;
        }
        if let Some(step) = forecast.confidence_step {
            confidence.step = step;
        }
        if let Some(cap) = forecast.confidence_cap {
            confidence.cap = cap;
        }
        if !(0.0..=1.0).contains(&confidence.base) || !(0.0..=1.0).contains(&confidence.cap) {
            return Err(Error::InvalidData(
                "forecast confidence base and cap must be within 0..=1".into(),
            ));
        }
    }

    if let Some(s) = raw.suggestions {
        let t = &mut config.suggestions;
        if let Some(v) = s.category_increase_ratio {
            t.category_increase_ratio = v;
        }
        if let Some(v) = s.category_increase_hard_ratio {
            t.category_increase_hard_ratio = v;
        }
        if let Some(v) = s.small_charge_min {
            t.small_charge_min = v;
        }
        if let Some(v) = s.small_charge_max {
            t.small_charge_max = v;
        }
        if let Some(v) = s.small_charge_min_count {
            t.small_charge_min_count = v;
        }
        if let Some(v) = s.small_charge_savings_ratio {
            t.small_charge_savings_ratio = v;
        }
        if let Some(v) = s.food_income_ratio {
            t.food_income_ratio = v;
        }
        if let Some(v) = s.food_savings_ratio {
            t.food_savings_ratio = v;
        }
        if let Some(v) = s.emergency_fund_ratio {
            t.emergency_fund_ratio = v;
        }
    }

    if let Some(insights) = raw.insights {
        let t = &mut config.insights;
        if let Some(v) = insights.trend_stable_band {
            t.trend_stable_band = v;
        }
        if let Some(v) = insights.trend_attention_increase {
            t.trend_attention_increase = v;
        }
        if t.trend_stable_band < 0.0 || t.trend_attention_increase < t.trend_stable_band {
            return Err(Error::InvalidData(
                "insights.trend_attention_increase must be at least trend_stable_band (>= 0)"
                    .into(),
            ));
        }
    }

    Ok(config)
}
