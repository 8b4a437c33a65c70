//! Funding rate model
//!
//! Linear, additive, saturating:
//!
//! `rate = clamp(imbalance × oi_weight + (volatility / 100) × volatility_weight, ±max_rate)`
//!
//! where `imbalance = (long - short) / (long + short)`. An empty market
//! (no open interest on either side) pays exactly zero. No state is carried
//! between calls.

use tracing::debug;
use types::errors::InputError;
use types::market::{FundingBreakdown, FundingRate, OpenInterestSnapshot};

use crate::config::{ConfigError, FundingConfig};

/// Funding rate model with injected weights
#[derive(Debug, Clone, Default)]
pub struct FundingRateModel {
    config: FundingConfig,
}

impl FundingRateModel {
    pub fn new(config: FundingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FundingConfig {
        &self.config
    }

    /// Funding rate for the given open interest and annualized volatility (percent).
    pub fn funding_rate(
        &self,
        oi: &OpenInterestSnapshot,
        volatility: f64,
    ) -> Result<FundingRate, InputError> {
        Ok(self.breakdown(oi, volatility)?.rate)
    }

    /// Funding rate together with the components it was built from.
    pub fn breakdown(
        &self,
        oi: &OpenInterestSnapshot,
        volatility: f64,
    ) -> Result<FundingBreakdown, InputError> {
        oi.validate()?;
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(InputError::InvalidVolatility(volatility));
        }

        let Some(oi_imbalance) = oi.imbalance() else {
            debug!("Empty market, funding rate is zero");
            return Ok(FundingBreakdown {
                oi_imbalance: 0.0,
                oi_component: 0.0,
                volatility_component: 0.0,
                rate: FundingRate::ZERO,
            });
        };

        let oi_component = oi_imbalance * self.config.oi_weight;
        let volatility_component = (volatility / 100.0) * self.config.volatility_weight;
        let rate = FundingRate::clamped(oi_component + volatility_component, self.config.max_rate);

        debug!(
            oi_imbalance,
            oi_component,
            volatility_component,
            rate = rate.value(),
            "Funding rate computed"
        );

        Ok(FundingBreakdown {
            oi_imbalance,
            oi_component,
            volatility_component,
            rate,
        })
    }
}
