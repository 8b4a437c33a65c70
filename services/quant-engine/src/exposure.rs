//! PnL and return calculations for a single position
//!
//! Deterministic unrealized PnL and return on equity over `Decimal`.

use rust_decimal::Decimal;
use types::errors::InputError;
use types::position::PositionSide;

/// Calculate unrealized PnL
///
/// LONG:  `(mark_price - entry_price) × size`
/// SHORT: `(entry_price - mark_price) × size`
pub fn unrealized_pnl(
    side: PositionSide,
    entry_price: Decimal,
    mark_price: Decimal,
    size: Decimal,
) -> Result<Decimal, InputError> {
    let move_in_favor = match side {
        PositionSide::LONG => mark_price.checked_sub(entry_price),
        PositionSide::SHORT => entry_price.checked_sub(mark_price),
    };
    move_in_favor
        .and_then(|d| d.checked_mul(size))
        .ok_or(InputError::Overflow("unrealized pnl"))
}

/// Return on equity in percent
///
/// `roe = pnl / margin × 100`, `None` when no margin was posted.
pub fn return_on_equity(pnl: Decimal, margin: Decimal) -> Option<Decimal> {
    if margin.is_zero() {
        return None;
    }
    pnl.checked_div(margin)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
}
