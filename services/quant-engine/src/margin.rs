//! Margin calculation functions
//!
//! Deterministic margin computations over position terms. All money
//! values use fixed-point `Decimal`; margins round away from zero at the
//! 18th decimal place to favor safety.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use types::errors::InputError;
use types::position::Position;

/// Internal precision for money quantities.
pub(crate) const INTERNAL_DP: u32 = 18;

/// Share of annualized volatility (as a fraction) added on top of base margin.
fn volatility_margin_loading() -> Decimal {
    Decimal::new(5, 1)
}

// ── Core margin calculations ─────────────────────────────────────────────

/// Notional position value
///
/// `notional = size × current_price`
pub fn notional(position: &Position) -> Result<Decimal, InputError> {
    position
        .size
        .checked_mul(position.current_price)
        .ok_or(InputError::Overflow("notional"))
}

/// Required (initial) margin
///
/// `required_margin = notional / leverage`
///
/// Rounds UP to favor safety.
pub fn required_margin(position: &Position) -> Result<Decimal, InputError> {
    if position.leverage == 0 {
        return Err(InputError::ZeroLeverage);
    }
    let result = notional(position)? / Decimal::from(position.leverage);
    Ok(round_up(result))
}

/// Margin ratio in percent
///
/// `margin_ratio = collateral / required_margin × 100`
///
/// Returns `Ok(None)` when no margin is required; the ratio is undefined there.
pub fn margin_ratio(
    collateral: Decimal,
    required_margin: Decimal,
) -> Result<Option<Decimal>, InputError> {
    if required_margin.is_zero() {
        return Ok(None);
    }
    collateral
        .checked_div(required_margin)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .map(|r| Some(round_internal(r)))
        .ok_or(InputError::Overflow("margin ratio"))
}

/// Maintenance margin of the stricter risk variant
///
/// `maintenance_margin = notional / (leverage × 2)`
pub fn maintenance_margin(position: &Position) -> Result<Decimal, InputError> {
    if position.leverage == 0 {
        return Err(InputError::ZeroLeverage);
    }
    let divisor = Decimal::from(position.leverage) * Decimal::TWO;
    Ok(round_up(notional(position)? / divisor))
}

/// Margin loaded for volatility
///
/// `margin = required_margin × (1 + volatility / 100 × 0.5)`
///
/// `volatility` is annualized, in percent.
pub fn volatility_adjusted_margin(
    position: &Position,
    volatility: f64,
) -> Result<Decimal, InputError> {
    if !(volatility.is_finite() && volatility >= 0.0) {
        return Err(InputError::InvalidVolatility(volatility));
    }
    let base = required_margin(position)?;
    let vol = Decimal::from_f64(volatility).ok_or(InputError::Overflow("volatility"))?;
    let multiplier = Decimal::ONE + vol / Decimal::ONE_HUNDRED * volatility_margin_loading();
    base.checked_mul(multiplier)
        .map(round_up)
        .ok_or(InputError::Overflow("volatility adjusted margin"))
}

// ── Rounding helpers (deterministic) ─────────────────────────────────────

/// Round UP to 18 decimal places (favor safety for margins).
pub(crate) fn round_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(INTERNAL_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Round DOWN to 18 decimal places (conservative for long liquidation prices).
pub(crate) fn round_down(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(INTERNAL_DP, RoundingStrategy::ToZero)
}

/// Round to 18 decimal places, banker's rounding.
pub(crate) fn round_internal(value: Decimal) -> Decimal {
    value.round_dp(INTERNAL_DP)
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use types::position::PositionSide;

    fn position(size: &str, leverage: u32, collateral: i64, price: i64) -> Position {
        Position::new(
            Decimal::from_str_exact(size).unwrap(),
            leverage,
            Decimal::from(collateral),
            PositionSide::LONG,
            Decimal::from(price),
        )
    }

    // ── notional / required margin ──

    #[test]
    fn test_notional() {
        let pos = position("0.5", 10, 1_000, 50_000);
        assert_eq!(notional(&pos).unwrap(), Decimal::from(25_000));
    }

    #[test]
    fn test_required_margin_10x() {
        // 1 BTC @ $50,000, 10x leverage → $5,000
        let pos = position("1", 10, 1_000, 50_000);
        assert_eq!(required_margin(&pos).unwrap(), Decimal::from(5_000));
    }

    #[test]
    fn test_required_margin_1x() {
        let pos = position("1", 1, 1_000, 50_000);
        assert_eq!(required_margin(&pos).unwrap(), Decimal::from(50_000));
    }

    #[test]
    fn test_required_margin_zero_leverage() {
        let pos = position("1", 0, 1_000, 50_000);
        assert_eq!(required_margin(&pos), Err(InputError::ZeroLeverage));
    }

    #[test]
    fn test_notional_overflow() {
        let pos = Position::new(Decimal::MAX, 10, Decimal::ZERO, PositionSide::LONG, Decimal::MAX);
        assert_eq!(notional(&pos), Err(InputError::Overflow("notional")));
    }

    // ── margin ratio ──

    #[test]
    fn test_margin_ratio_percent() {
        // collateral 1000 against 5000 required → 20%
        let ratio = margin_ratio(Decimal::from(1_000), Decimal::from(5_000));
        assert_eq!(ratio, Ok(Some(Decimal::from(20))));
    }

    #[test]
    fn test_margin_ratio_over_collateralized() {
        let ratio = margin_ratio(Decimal::from(6_000), Decimal::from(500));
        assert_eq!(ratio, Ok(Some(Decimal::from(1_200))));
    }

    #[test]
    fn test_margin_ratio_undefined() {
        assert_eq!(margin_ratio(Decimal::from(5_000), Decimal::ZERO), Ok(None));
    }

    #[test]
    fn test_margin_ratio_overflow_is_an_error() {
        let ratio = margin_ratio(Decimal::MAX, Decimal::new(5, 1));
        assert_eq!(ratio, Err(InputError::Overflow("margin ratio")));
    }

    // ── maintenance margin ──

    #[test]
    fn test_maintenance_margin_half_of_initial() {
        let pos = position("1", 10, 1_000, 50_000);
        let mm = maintenance_margin(&pos).unwrap();
        assert_eq!(mm, Decimal::from(2_500));
        assert!(mm < required_margin(&pos).unwrap(), "Invariant: maintenance < initial");
    }

    // ── volatility adjusted margin ──

    #[test]
    fn test_volatility_adjusted_margin() {
        // 5000 × (1 + 0.40 × 0.5) = 6000
        let pos = position("1", 10, 1_000, 50_000);
        let margin = volatility_adjusted_margin(&pos, 40.0).unwrap();
        assert_eq!(margin, Decimal::from(6_000));
    }

    #[test]
    fn test_volatility_adjusted_margin_zero_vol() {
        let pos = position("1", 10, 1_000, 50_000);
        assert_eq!(
            volatility_adjusted_margin(&pos, 0.0).unwrap(),
            required_margin(&pos).unwrap()
        );
    }

    #[test]
    fn test_volatility_adjusted_margin_rejects_negative() {
        let pos = position("1", 10, 1_000, 50_000);
        assert_eq!(
            volatility_adjusted_margin(&pos, -5.0),
            Err(InputError::InvalidVolatility(-5.0))
        );
    }

    // ── determinism test ──

    #[test]
    fn test_deterministic_calculations() {
        let pos = position("1.2345", 7, 1_000, 12_345);
        let r1 = required_margin(&pos).unwrap();
        let r2 = required_margin(&pos).unwrap();
        assert_eq!(r1, r2, "Determinism violated");
    }
}
