//! Volatility signal types

use serde::{Deserialize, Serialize};

/// Direction of the forecast relative to current volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityTrend {
    Increasing,
    /// Also used when predicted equals current
    Decreasing,
}

/// Point forecast of annualized volatility (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityForecast {
    pub current: f64,
    pub predicted: f64,
    pub trend: VolatilityTrend,
    /// In [0, 1]
    pub confidence: f64,
}

/// Summary statistics of a return series used as model features.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnFeatures {
    /// Annualized volatility, percent
    pub volatility: f64,
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
    pub mean_return: f64,
    pub sample_count: usize,
}
