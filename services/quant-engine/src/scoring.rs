//! Position risk scoring
//!
//! Score is the sum of three terms, clamped to [0, 100]:
//!
//! | Term       | Formula                                   | Cap            |
//! |------------|-------------------------------------------|----------------|
//! | leverage   | `leverage / 100 × 40`                     | none before clamp |
//! | collateral | `required_margin / collateral × 30`       | 60             |
//! | volatility | `volatility / 100 × 30`                   | 30             |
//!
//! The leverage term has no cap of its own: leverage 250 alone scores
//! 100. Zero collateral uses a sentinel ratio of 100, which saturates the
//! collateral term.
//!
//! Levels: `high` above 70, `medium` above 40, `low` otherwise. The same
//! 70 cut-off drives the `reduce_leverage` recommendation.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::errors::InputError;
use types::position::Position;
use types::risk::{Recommendation, RiskAssessment, RiskLevel};

use crate::liquidation;
use crate::margin;

pub const MAX_RISK_SCORE: f64 = 100.0;
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;
pub const MEDIUM_RISK_THRESHOLD: f64 = 40.0;

/// Collateral ratio reported when no collateral is posted.
pub const ZERO_COLLATERAL_RATIO: f64 = 100.0;

const LEVERAGE_POINTS_PER_100X: f64 = 40.0;
const COLLATERAL_POINTS_PER_RATIO: f64 = 30.0;
const COLLATERAL_RISK_CAP: f64 = 60.0;
const VOLATILITY_POINTS_PER_100PCT: f64 = 30.0;
const VOLATILITY_RISK_CAP: f64 = 30.0;

/// Individual score terms before the final clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskComponents {
    /// Margin the collateral term was measured against
    pub required_margin: Decimal,
    pub leverage_risk: f64,
    pub collateral_ratio: f64,
    pub collateral_risk: f64,
    /// Zero when no volatility was supplied
    pub volatility_risk: f64,
}

impl RiskComponents {
    /// Sum of terms clamped to [0, 100].
    pub fn score(&self) -> f64 {
        (self.leverage_risk + self.collateral_risk + self.volatility_risk).clamp(0.0, MAX_RISK_SCORE)
    }
}

/// Classify a score.
pub fn risk_level(score: f64) -> RiskLevel {
    if score > HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score > MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn recommendation(score: f64) -> Recommendation {
    if score > HIGH_RISK_THRESHOLD {
        Recommendation::ReduceLeverage
    } else {
        Recommendation::Ok
    }
}

/// Compute the score terms for a position.
pub fn risk_components(
    position: &Position,
    volatility: Option<f64>,
) -> Result<RiskComponents, InputError> {
    position.validate()?;
    let required = margin::required_margin(position)?;

    let leverage_risk = position.leverage as f64 / 100.0 * LEVERAGE_POINTS_PER_100X;

    let collateral_ratio = if position.collateral > Decimal::ZERO {
        required
            .checked_div(position.collateral)
            .and_then(|r| r.to_f64())
            .unwrap_or(f64::MAX)
    } else {
        warn!(
            required_margin = %required,
            "No collateral posted, using sentinel collateral ratio"
        );
        ZERO_COLLATERAL_RATIO
    };
    let collateral_risk = (collateral_ratio * COLLATERAL_POINTS_PER_RATIO).min(COLLATERAL_RISK_CAP);

    let volatility_risk = match volatility {
        Some(v) if v.is_finite() && v >= 0.0 => {
            (v / 100.0 * VOLATILITY_POINTS_PER_100PCT).min(VOLATILITY_RISK_CAP)
        }
        Some(v) => return Err(InputError::InvalidVolatility(v)),
        None => 0.0,
    };

    Ok(RiskComponents {
        required_margin: required,
        leverage_risk,
        collateral_ratio,
        collateral_risk,
        volatility_risk,
    })
}

/// Position risk scorer
///
/// Uses the collateral-based liquidation price; the maintenance-margin
/// variant never feeds an assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    /// Assess a position, optionally including a volatility term.
    pub fn score(
        &self,
        position: &Position,
        volatility: Option<f64>,
    ) -> Result<RiskAssessment, InputError> {
        let components = risk_components(position, volatility)?;
        let score = components.score();

        let required_margin = components.required_margin;
        let liquidation_price = liquidation::liquidation_price(position)?;
        let margin_ratio = margin::margin_ratio(position.collateral, required_margin)?;

        let assessment = RiskAssessment {
            score,
            level: risk_level(score),
            required_margin,
            liquidation_price,
            margin_ratio,
            recommendation: recommendation(score),
        };

        debug!(
            score,
            leverage_risk = components.leverage_risk,
            collateral_risk = components.collateral_risk,
            volatility_risk = components.volatility_risk,
            level = ?assessment.level,
            "Position risk scored"
        );

        Ok(assessment)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
