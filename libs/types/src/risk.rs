//! Risk assessment types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categorical risk level derived from the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// score <= 40
    Low,
    /// 40 < score <= 70
    Medium,
    /// score > 70
    High,
}

/// Action suggested to the position holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Ok,
    ReduceLeverage,
}

/// Full risk picture of a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// In [0, 100]
    pub score: f64,
    pub level: RiskLevel,
    pub required_margin: Decimal,
    pub liquidation_price: Decimal,
    /// `collateral / required_margin * 100`; `None` when no margin is required
    pub margin_ratio: Option<Decimal>,
    pub recommendation: Recommendation,
}

impl RiskAssessment {
    pub fn is_high_risk(&self) -> bool {
        self.level == RiskLevel::High
    }
}
