//! Volatility forecaster
//!
//! Naive baseline: blend volatility over the lookback window with
//! volatility over a shorter recent window.
//!
//! Histories shorter than the lookback are padded by repeating the last
//! price. This biases short histories toward zero volatility. Padding logs
//! at `debug`, or at `warn` when the history does not cover the recent window.

use tracing::{debug, warn};
use types::errors::InputError;
use types::series::PriceSeries;
use types::volatility::{VolatilityForecast, VolatilityTrend};

use crate::config::{ConfigError, ForecastConfig};
use crate::volatility::windowed_volatility;

/// Volatility forecaster with injected parameters
#[derive(Debug, Clone, Default)]
pub struct VolatilityForecaster {
    config: ForecastConfig,
}

impl VolatilityForecaster {
    pub fn new(config: ForecastConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast annualized volatility for `prices`.
    pub fn forecast(&self, prices: &PriceSeries) -> Result<VolatilityForecast, InputError> {
        let lookback = self.config.lookback_period;
        let factor = self.config.annualization_factor;

        let padded;
        let series = if prices.len() < lookback {
            if prices.len() < self.config.recent_window {
                warn!(
                    available = prices.len(),
                    recent_window = self.config.recent_window,
                    "Price history shorter than recent window, forecast is mostly padding"
                );
            } else {
                debug!(
                    available = prices.len(),
                    lookback, "Padding short price history with last price"
                );
            }
            padded = prices.padded_to(lookback);
            &padded
        } else {
            prices
        };

        let current = windowed_volatility(series.as_slice(), lookback, factor)?;
        let recent = windowed_volatility(series.as_slice(), self.config.recent_window, factor)?;
        let predicted = blend(current, recent, self.config.current_weight);

        let forecast = VolatilityForecast {
            current,
            predicted,
            trend: trend(current, predicted),
            confidence: self.config.confidence,
        };
        debug!(current, recent, predicted, "Volatility forecast computed");
        Ok(forecast)
    }
}

/// `w * current + (1 - w) * recent`; `w = 0.5` gives the plain average.
pub fn blend(current: f64, recent: f64, current_weight: f64) -> f64 {
    current_weight * current + (1.0 - current_weight) * recent
}

/// Increasing only when the forecast is strictly above current volatility.
pub fn trend(current: f64, predicted: f64) -> VolatilityTrend {
    if predicted > current {
        VolatilityTrend::Increasing
    } else {
        VolatilityTrend::Decreasing
    }
}
