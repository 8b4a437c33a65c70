//! Market-wide inputs and the funding rate signal

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Hard bound on the absolute funding rate (10% per interval).
pub const FUNDING_RATE_CAP: f64 = 0.10;

/// Open interest on each side of the book.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenInterestSnapshot {
    pub long: f64,
    pub short: f64,
}

impl OpenInterestSnapshot {
    pub fn new(long: f64, short: f64) -> Self {
        Self { long, short }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(self.long) && valid(self.short) {
            Ok(())
        } else {
            Err(InputError::InvalidOpenInterest {
                long: self.long,
                short: self.short,
            })
        }
    }

    pub fn total(&self) -> f64 {
        self.long + self.short
    }

    /// `(long - short) / (long + short)`, in [-1, 1]; `None` for an empty market.
    ///
    /// Sides whose sum overflows `f64` are halved first.
    pub fn imbalance(&self) -> Option<f64> {
        let total = self.total();
        if total == 0.0 {
            None
        } else if total.is_finite() {
            Some((self.long - self.short) / total)
        } else {
            let (long, short) = (self.long / 2.0, self.short / 2.0);
            Some((long - short) / (long + short))
        }
    }
}

/// Funding rate per interval, always within `±FUNDING_RATE_CAP`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundingRate(f64);

impl FundingRate {
    pub const ZERO: FundingRate = FundingRate(0.0);

    /// Clamp a raw rate into `[-bound, bound]`, with `bound` itself capped at
    /// `FUNDING_RATE_CAP`.
    pub fn clamped(raw: f64, bound: f64) -> Self {
        let bound = bound.abs().min(FUNDING_RATE_CAP);
        Self(raw.clamp(-bound, bound))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

/// Components that made up a funding rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundingBreakdown {
    /// OI imbalance in [-1, 1]; 0 for an empty market
    pub oi_imbalance: f64,
    pub oi_component: f64,
    pub volatility_component: f64,
    /// Sum of components after clamping
    pub rate: FundingRate,
}
