//! Position terms
//!
//! The immutable description of a leveraged perpetual position as handed to
//! the engine by its caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Position side enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionSide {
    /// Long position - profit when price increases
    LONG,
    /// Short position - profit when price decreases
    SHORT,
}

impl PositionSide {
    pub fn from_is_long(is_long: bool) -> Self {
        if is_long {
            PositionSide::LONG
        } else {
            PositionSide::SHORT
        }
    }

    pub fn is_long(self) -> bool {
        matches!(self, PositionSide::LONG)
    }
}

/// Position terms used for margin, liquidation and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Contract quantity
    pub size: Decimal,
    /// Leverage multiplier, >= 1
    pub leverage: u32,
    /// Collateral posted (quote currency)
    pub collateral: Decimal,
    pub side: PositionSide,
    /// Price the position is evaluated at
    pub current_price: Decimal,
}

impl Position {
    /// Create a new position
    pub fn new(
        size: Decimal,
        leverage: u32,
        collateral: Decimal,
        side: PositionSide,
        current_price: Decimal,
    ) -> Self {
        Self {
            size,
            leverage,
            collateral,
            side,
            current_price,
        }
    }

    /// Check the position terms for values no formula is defined on.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.leverage == 0 {
            return Err(InputError::ZeroLeverage);
        }
        if self.size.is_zero() || self.current_price.is_zero() {
            return Err(InputError::ZeroNotional);
        }
        if self.size < Decimal::ZERO {
            return Err(InputError::NonPositiveSize(self.size.to_string()));
        }
        if self.current_price < Decimal::ZERO {
            return Err(InputError::NonPositiveCurrentPrice(
                self.current_price.to_string(),
            ));
        }
        if self.collateral < Decimal::ZERO {
            return Err(InputError::NegativeCollateral(self.collateral.to_string()));
        }
        Ok(())
    }

    pub fn is_long(&self) -> bool {
        self.side.is_long()
    }
}
