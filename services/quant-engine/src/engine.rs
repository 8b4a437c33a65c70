//! Quant engine orchestrator
//!
//! Ties together returns, volatility, forecasting, funding, margin and
//! scoring behind one configured entry point. Holds only immutable
//! configuration, so a single engine can be shared across threads.

use rust_decimal::Decimal;
use tracing::debug;
use types::errors::EngineError;
use types::market::{FundingBreakdown, FundingRate, OpenInterestSnapshot};
use types::position::Position;
use types::risk::RiskAssessment;
use types::series::PriceSeries;
use types::volatility::{ReturnFeatures, VolatilityForecast};

use crate::config::EngineConfig;
use crate::forecast::VolatilityForecaster;
use crate::funding::FundingRateModel;
use crate::margin;
use crate::scoring::RiskScorer;
use crate::volatility;

/// Quant engine service
#[derive(Debug, Clone)]
pub struct QuantEngine {
    config: EngineConfig,
    forecaster: VolatilityForecaster,
    funding: FundingRateModel,
    scorer: RiskScorer,
}

impl QuantEngine {
    /// Create a new engine with default configuration
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            forecaster: VolatilityForecaster::default(),
            funding: FundingRateModel::default(),
            scorer: RiskScorer::new(),
            config,
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let forecaster = VolatilityForecaster::new(config.forecast.clone())?;
        let funding = FundingRateModel::new(config.funding.clone())?;
        debug!(?config, "Quant engine configured");
        Ok(Self {
            config,
            forecaster,
            funding,
            scorer: RiskScorer::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Volatility forecast for a price history.
    pub fn predict_volatility(&self, prices: &[f64]) -> Result<VolatilityForecast, EngineError> {
        let series = PriceSeries::try_new(prices.to_vec())?;
        Ok(self.forecaster.forecast(&series)?)
    }

    /// Volatility, skewness, kurtosis and mean over the full return history.
    pub fn return_features(&self, prices: &[f64]) -> Result<ReturnFeatures, EngineError> {
        Ok(volatility::return_features(
            prices,
            self.config.forecast.annualization_factor,
        )?)
    }

    /// Annualized volatility (percent) over the configured lookback window.
    pub fn current_volatility(&self, prices: &[f64]) -> Result<f64, EngineError> {
        let series = PriceSeries::try_new(prices.to_vec())?;
        Ok(volatility::windowed_volatility(
            series.as_slice(),
            self.config.forecast.lookback_period,
            self.config.forecast.annualization_factor,
        )?)
    }

    /// Funding rate from open interest and an annualized volatility (percent).
    pub fn funding_rate(
        &self,
        oi: &OpenInterestSnapshot,
        volatility: f64,
    ) -> Result<FundingRate, EngineError> {
        Ok(self.funding.funding_rate(oi, volatility)?)
    }

    /// Funding rate with its components.
    pub fn funding_breakdown(
        &self,
        oi: &OpenInterestSnapshot,
        volatility: f64,
    ) -> Result<FundingBreakdown, EngineError> {
        Ok(self.funding.breakdown(oi, volatility)?)
    }

    /// Funding rate driven by the lookback volatility of `prices`.
    pub fn funding_rate_from_prices(
        &self,
        oi: &OpenInterestSnapshot,
        prices: &[f64],
    ) -> Result<FundingRate, EngineError> {
        let vol = self.current_volatility(prices)?;
        self.funding_rate(oi, vol)
    }

    /// Risk assessment of a position; `volatility` adds the volatility term.
    pub fn assess_risk(
        &self,
        position: &Position,
        volatility: Option<f64>,
    ) -> Result<RiskAssessment, EngineError> {
        Ok(self.scorer.score(position, volatility)?)
    }

    /// Risk assessment using the lookback volatility of `prices`.
    pub fn assess_risk_with_history(
        &self,
        position: &Position,
        prices: &[f64],
    ) -> Result<RiskAssessment, EngineError> {
        let vol = self.current_volatility(prices)?;
        self.assess_risk(position, Some(vol))
    }

    /// Required margin loaded for volatility.
    pub fn margin_requirement(
        &self,
        position: &Position,
        volatility: f64,
    ) -> Result<Decimal, EngineError> {
        position.validate()?;
        Ok(margin::volatility_adjusted_margin(position, volatility)?)
    }
}

impl Default for QuantEngine {
    fn default() -> Self {
        Self::new()
    }
}
