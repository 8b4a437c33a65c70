//! Liquidation calculations
//!
//! Two formulas exist and they are not interchangeable:
//!
//! - [`liquidation_price`]: the collateral-based price at which posted
//!   collateral is fully consumed. Used by every assessment and score.
//! - [`maintenance_liquidation_price`]: the stricter maintenance-margin
//!   variant (`notional / (leverage × 2)`). Standalone only.
//!
//! Long prices round toward zero. A long with any positive collateral below
//! notional liquidates at least one internal unit (`1e-18`) below the
//! current price, even when the collateral is too small to move the price
//! at 18 decimal places.

use rust_decimal::Decimal;
use types::errors::InputError;
use types::position::{Position, PositionSide};

use crate::margin::{self, round_down, round_internal, INTERNAL_DP};

/// Liquidation price of a position
///
/// LONG:  `current_price × (1 - collateral / notional)`
/// SHORT: `current_price × (1 + collateral / notional)`
///
/// Clamped to zero: a long whose collateral covers its full notional
/// cannot be liquidated by price.
pub fn liquidation_price(position: &Position) -> Result<Decimal, InputError> {
    let notional = margin::notional(position)?;
    if notional.is_zero() {
        return Err(InputError::ZeroNotional);
    }
    let price = position.current_price;
    let cover = position
        .collateral
        .checked_div(notional)
        .ok_or(InputError::Overflow("collateral / notional"))?;
    let offset = price
        .checked_mul(cover)
        .ok_or(InputError::Overflow("liquidation price"))?;

    match position.side {
        PositionSide::LONG => {
            let mut lp = round_down(price - offset);
            if position.collateral > Decimal::ZERO && lp >= price {
                lp = price - Decimal::new(1, INTERNAL_DP);
            }
            Ok(lp.max(Decimal::ZERO))
        }
        PositionSide::SHORT => {
            let lp = price
                .checked_add(offset)
                .ok_or(InputError::Overflow("liquidation price"))?;
            Ok(round_internal(lp))
        }
    }
}

/// Liquidation price under the maintenance-margin variant
///
/// LONG:  `current_price - maintenance_margin / size`
/// SHORT: `current_price + maintenance_margin / size`
///
/// Clamped to zero.
pub fn maintenance_liquidation_price(position: &Position) -> Result<Decimal, InputError> {
    if position.size.is_zero() {
        return Err(InputError::ZeroNotional);
    }
    let mm = margin::maintenance_margin(position)?;
    let offset = mm
        .checked_div(position.size)
        .ok_or(InputError::Overflow("maintenance margin / size"))?;

    let lp = match position.side {
        PositionSide::LONG => position.current_price.checked_sub(offset),
        PositionSide::SHORT => position.current_price.checked_add(offset),
    }
    .ok_or(InputError::Overflow("liquidation price"))?;
    Ok(round_internal(lp.max(Decimal::ZERO)))
}

/// Whether `mark_price` has crossed `liquidation_price`
///
/// LONG liquidates at or below, SHORT at or above.
pub fn should_liquidate(side: PositionSide, liquidation_price: Decimal, mark_price: Decimal) -> bool {
    match side {
        PositionSide::LONG => mark_price <= liquidation_price,
        PositionSide::SHORT => mark_price >= liquidation_price,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn btc(side: PositionSide, collateral: i64) -> Position {
        Position::new(
            Decimal::from(1),
            10,
            Decimal::from(collateral),
            side,
            Decimal::from(50_000),
        )
    }

    // ── liquidation_price tests ──

    #[test]
    fn test_liquidation_price_long() {
        // 50000 × (1 - 1000 / 50000) = 49000
        let lp = liquidation_price(&btc(PositionSide::LONG, 1_000)).unwrap();
        assert_eq!(lp, Decimal::from(49_000));
    }

    #[test]
    fn test_liquidation_price_short() {
        // 50000 × (1 + 1000 / 50000) = 51000
        let lp = liquidation_price(&btc(PositionSide::SHORT, 1_000)).unwrap();
        assert_eq!(lp, Decimal::from(51_000));
    }

    #[test]
    fn test_liquidation_price_long_fully_collateralized() {
        let lp = liquidation_price(&btc(PositionSide::LONG, 50_000)).unwrap();
        assert_eq!(lp, Decimal::ZERO);

        let lp = liquidation_price(&btc(PositionSide::LONG, 80_000)).unwrap();
        assert_eq!(lp, Decimal::ZERO);
    }

    #[test]
    fn test_liquidation_price_zero_collateral() {
        let lp = liquidation_price(&btc(PositionSide::LONG, 0)).unwrap();
        assert_eq!(lp, Decimal::from(50_000));
    }

    #[test]
    fn test_liquidation_price_long_dust_collateral() {
        // cover = 2e-25: the price moves by 1e-20, below 18dp resolution
        let mut pos = btc(PositionSide::LONG, 0);
        pos.collateral = Decimal::new(1, 20);
        let lp = liquidation_price(&pos).unwrap();
        assert!(lp < pos.current_price);
        assert_eq!(lp, Decimal::from_str_exact("49999.999999999999999999").unwrap());

        // cover underflows Decimal entirely: one internal unit below
        pos.collateral = Decimal::new(1, 28);
        let lp = liquidation_price(&pos).unwrap();
        assert_eq!(lp, pos.current_price - Decimal::new(1, INTERNAL_DP));
    }

    #[test]
    fn test_liquidation_price_long_rounds_toward_zero() {
        // 3 × (1 - 1/3) = 2, computed as 3 - 3 × 0.333… and truncated
        let pos = Position::new(
            Decimal::from(1),
            10,
            Decimal::from(1),
            PositionSide::LONG,
            Decimal::from(3),
        );
        let lp = liquidation_price(&pos).unwrap();
        assert!(lp <= Decimal::TWO);
        assert!(Decimal::TWO - lp <= Decimal::new(1, INTERNAL_DP));
    }

    #[test]
    fn test_liquidation_price_zero_notional() {
        let mut pos = btc(PositionSide::LONG, 1_000);
        pos.size = Decimal::ZERO;
        assert_eq!(liquidation_price(&pos), Err(InputError::ZeroNotional));
    }

    #[test]
    fn test_liquidation_price_ignores_leverage() {
        let mut pos = btc(PositionSide::LONG, 1_000);
        pos.leverage = 100;
        assert_eq!(liquidation_price(&pos).unwrap(), Decimal::from(49_000));
    }

    // ── maintenance variant ──

    #[test]
    fn test_maintenance_liquidation_long() {
        // MM = 50000 / 20 = 2500 → 50000 - 2500 = 47500
        let lp = maintenance_liquidation_price(&btc(PositionSide::LONG, 1_000)).unwrap();
        assert_eq!(lp, Decimal::from(47_500));
    }

    #[test]
    fn test_maintenance_liquidation_short() {
        let lp = maintenance_liquidation_price(&btc(PositionSide::SHORT, 1_000)).unwrap();
        assert_eq!(lp, Decimal::from(52_500));
    }

    #[test]
    fn test_variants_differ() {
        let pos = btc(PositionSide::LONG, 1_000);
        assert_ne!(
            liquidation_price(&pos).unwrap(),
            maintenance_liquidation_price(&pos).unwrap()
        );
    }

    #[test]
    fn test_maintenance_liquidation_zero_leverage() {
        let mut pos = btc(PositionSide::LONG, 1_000);
        pos.leverage = 0;
        assert_eq!(
            maintenance_liquidation_price(&pos),
            Err(InputError::ZeroLeverage)
        );
    }

    // ── should_liquidate tests ──

    #[test]
    fn test_should_liquidate_long() {
        let lp = Decimal::from(49_000);
        assert!(should_liquidate(PositionSide::LONG, lp, Decimal::from(48_999)));
        assert!(should_liquidate(PositionSide::LONG, lp, Decimal::from(49_000)));
        assert!(!should_liquidate(PositionSide::LONG, lp, Decimal::from(49_001)));
    }

    #[test]
    fn test_should_liquidate_short() {
        let lp = Decimal::from(51_000);
        assert!(should_liquidate(PositionSide::SHORT, lp, Decimal::from(51_000)));
        assert!(!should_liquidate(PositionSide::SHORT, lp, Decimal::from(50_999)));
    }
}
