//! Historical volatility and higher moments
//!
//! Volatility is the population standard deviation of log returns,
//! annualized by `sqrt(annualization_factor)` and expressed in percent.
//! Degenerate inputs (fewer than two returns, zero dispersion) yield `0.0`
//! rather than an error.

use types::errors::InputError;
use types::volatility::ReturnFeatures;

use crate::returns::{log_returns, tail};

/// Trading periods per year for daily data.
pub const DEFAULT_ANNUALIZATION_FACTOR: f64 = 252.0;

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population (not sample-corrected) standard deviation.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// `population_std(returns) * sqrt(annualization_factor) * 100`
///
/// Empty and single-element inputs return `0.0`.
pub fn annualized_volatility(returns: &[f64], annualization_factor: f64) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    population_std(returns) * annualization_factor.sqrt() * 100.0
}

/// Annualized volatility of the last `window` returns of `prices`.
///
/// Uses every available return when the history holds fewer than `window`.
pub fn windowed_volatility(
    prices: &[f64],
    window: usize,
    annualization_factor: f64,
) -> Result<f64, InputError> {
    let returns = log_returns(prices)?;
    Ok(annualized_volatility(tail(&returns, window), annualization_factor))
}

/// Third standardized moment. `0.0` when the returns have no dispersion.
pub fn skewness(returns: &[f64]) -> f64 {
    standardized_moment(returns, 3)
}

/// Excess kurtosis (fourth standardized moment minus 3). `0.0` when the
/// returns have no dispersion.
pub fn kurtosis(returns: &[f64]) -> f64 {
    let std = population_std(returns);
    if std == 0.0 {
        return 0.0;
    }
    standardized_moment(returns, 4) - 3.0
}

fn standardized_moment(returns: &[f64], order: i32) -> f64 {
    let std = population_std(returns);
    if std == 0.0 {
        return 0.0;
    }
    let m = mean(returns);
    let z: Vec<f64> = returns.iter().map(|r| ((r - m) / std).powi(order)).collect();
    mean(&z)
}

/// Feature vector over the full return history of `prices`.
pub fn return_features(
    prices: &[f64],
    annualization_factor: f64,
) -> Result<ReturnFeatures, InputError> {
    let returns = log_returns(prices)?;
    Ok(ReturnFeatures {
        volatility: annualized_volatility(&returns, annualization_factor),
        skewness: skewness(&returns),
        kurtosis: kurtosis(&returns),
        mean_return: mean(&returns),
        sample_count: returns.len(),
    })
}
