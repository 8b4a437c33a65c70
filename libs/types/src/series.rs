//! Price history types
//!
//! A `PriceSeries` is the validated input to every volatility computation:
//! chronological, non-empty, strictly positive, finite.

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, InputError};

/// Ordered sequence of positive finite prices, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    /// Validate and wrap a price history.
    ///
    /// Fails with `InsufficientData` when empty and `InvalidInput` on the
    /// first non-finite or non-positive price.
    pub fn try_new(prices: Vec<f64>) -> Result<Self, EngineError> {
        if prices.is_empty() {
            return Err(EngineError::InsufficientData {
                required: 1,
                available: 0,
            });
        }
        validate_prices(&prices)?;
        Ok(Self(prices))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed series; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recent price.
    pub fn last(&self) -> f64 {
        // Non-empty by construction.
        self.0[self.0.len() - 1]
    }

    /// Extend the series by repeating its last price until it holds
    /// `target_len` points. No-op when already long enough.
    pub fn padded_to(&self, target_len: usize) -> Self {
        let mut prices = self.0.clone();
        if prices.len() < target_len {
            let last = self.last();
            prices.resize(target_len, last);
        }
        Self(prices)
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = EngineError;

    fn try_from(prices: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_new(prices)
    }
}

impl From<PriceSeries> for Vec<f64> {
    fn from(series: PriceSeries) -> Self {
        series.0
    }
}

/// Check every price is finite and strictly positive.
pub fn validate_prices(prices: &[f64]) -> Result<(), InputError> {
    for (index, &value) in prices.iter().enumerate() {
        if !value.is_finite() {
            return Err(InputError::NonFinitePrice { index });
        }
        if value <= 0.0 {
            return Err(InputError::NonPositivePrice { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_creation() {
        let series = PriceSeries::try_new(vec![100.0, 101.0, 99.5]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.last(), 99.5);
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = PriceSeries::try_new(vec![]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientData {
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let err = PriceSeries::try_new(vec![100.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InputError::NonPositivePrice {
                index: 1,
                value: 0.0
            })
        );
    }

    #[test]
    fn test_nan_price_rejected() {
        let err = PriceSeries::try_new(vec![f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InputError::NonFinitePrice { index: 0 })
        );
    }

    #[test]
    fn test_padding_repeats_last_price() {
        let series = PriceSeries::try_new(vec![10.0, 11.0]).unwrap();
        let padded = series.padded_to(5);
        assert_eq!(padded.as_slice(), &[10.0, 11.0, 11.0, 11.0, 11.0]);
    }

    #[test]
    fn test_padding_noop_when_long_enough() {
        let series = PriceSeries::try_new(vec![10.0, 11.0, 12.0]).unwrap();
        assert_eq!(series.padded_to(2), series);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PriceSeries = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(ok.len(), 2);
        assert!(serde_json::from_str::<PriceSeries>("[1.0, -2.0]").is_err());
    }
}
