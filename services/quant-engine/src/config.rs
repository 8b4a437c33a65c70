//! Engine configuration
//!
//! Parameters that the surrounding service would otherwise keep in a
//! loaded model. Injected once at construction and validated there.
//! Defaults reproduce the reference constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::errors::EngineError;
use types::market::FUNDING_RATE_CAP;

use crate::volatility::DEFAULT_ANNUALIZATION_FACTOR;

/// Fixed forecast confidence. Not estimated from data.
pub const DEFAULT_FORECAST_CONFIDENCE: f64 = 0.85;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config {
            message: err.to_string(),
        }
    }
}

/// Volatility forecaster parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Returns in the "current" window; shorter histories are padded to this length
    pub lookback_period: usize,
    /// Returns in the "recent" window
    pub recent_window: usize,
    /// Periods per year used to annualize volatility
    pub annualization_factor: f64,
    /// Weight of current volatility in the blend; the rest goes to recent
    pub current_weight: f64,
    /// Reported forecast confidence
    pub confidence: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            lookback_period: 24,
            recent_window: 12,
            annualization_factor: DEFAULT_ANNUALIZATION_FACTOR,
            current_weight: 0.5,
            confidence: DEFAULT_FORECAST_CONFIDENCE,
        }
    }
}

impl ForecastConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_period < 2 {
            return Err(out_of_range("lookback_period", "must be >= 2"));
        }
        if self.recent_window == 0 {
            return Err(out_of_range("recent_window", "must be >= 1"));
        }
        if !(self.annualization_factor.is_finite() && self.annualization_factor > 0.0) {
            return Err(out_of_range("annualization_factor", "must be positive and finite"));
        }
        if !unit_interval(self.current_weight) {
            return Err(out_of_range("current_weight", "must be within [0, 1]"));
        }
        if !unit_interval(self.confidence) {
            return Err(out_of_range("confidence", "must be within [0, 1]"));
        }
        Ok(())
    }
}

/// Funding rate model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundingConfig {
    /// Rate contributed by a fully one-sided market
    pub oi_weight: f64,
    /// Rate contributed per 100% of annualized volatility
    pub volatility_weight: f64,
    /// Absolute bound on the final rate
    pub max_rate: f64,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            oi_weight: 0.05,
            volatility_weight: 0.02,
            max_rate: FUNDING_RATE_CAP,
        }
    }
}

impl FundingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.oi_weight.is_finite() && self.oi_weight >= 0.0) {
            return Err(out_of_range("oi_weight", "must be non-negative and finite"));
        }
        if !(self.volatility_weight.is_finite() && self.volatility_weight >= 0.0) {
            return Err(out_of_range("volatility_weight", "must be non-negative and finite"));
        }
        if !(self.max_rate > 0.0 && self.max_rate <= FUNDING_RATE_CAP) {
            return Err(out_of_range(
                "max_rate",
                format!("must be within (0, {}]", FUNDING_RATE_CAP),
            ));
        }
        Ok(())
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub forecast: ForecastConfig,
    pub funding: FundingConfig,
}

impl EngineConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.forecast.validate()?;
        self.funding.validate()
    }
}

fn unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn out_of_range(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        reason: reason.into(),
    }
}
