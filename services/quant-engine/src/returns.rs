//! Log return series
//!
//! `r[i] = ln(p[i]) - ln(p[i-1])`. Every price must be finite and strictly
//! positive; the logarithm is undefined otherwise.

use types::errors::InputError;
use types::series::validate_prices;

/// Compute log returns of a chronological price sequence.
///
/// Returns an empty vector for fewer than two prices. Callers treat that
/// as "insufficient data", not as an error.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, InputError> {
    validate_prices(prices)?;
    Ok(prices
        .windows(2)
        .map(|w| w[1].ln() - w[0].ln())
        .collect())
}

/// Last `window` elements of `returns`, or all of them when fewer exist.
pub fn tail(returns: &[f64], window: usize) -> &[f64] {
    let start = returns.len().saturating_sub(window);
    &returns[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_returns_reference_series() {
        let r = log_returns(&[100.0, 101.0, 99.0, 100.0, 100.0]).unwrap();
        assert_eq!(r.len(), 4);
        assert!((r[0] - 0.00995).abs() < 1e-5);
        assert!((r[1] - (-0.02)).abs() < 1e-4);
        assert!((r[2] - 0.01005).abs() < 1e-5);
        assert_eq!(r[3], 0.0);
    }

    #[test]
    fn test_log_returns_short_input() {
        assert!(log_returns(&[]).unwrap().is_empty());
        assert!(log_returns(&[42.0]).unwrap().is_empty());
    }

    #[test]
    fn test_log_returns_rejects_zero_price() {
        let err = log_returns(&[100.0, 0.0, 101.0]).unwrap_err();
        assert_eq!(err, InputError::NonPositivePrice { index: 1, value: 0.0 });
    }

    #[test]
    fn test_log_returns_rejects_negative_price() {
        assert!(matches!(
            log_returns(&[-5.0, 10.0]),
            Err(InputError::NonPositivePrice { index: 0, .. })
        ));
    }

    #[test]
    fn test_log_returns_rejects_infinite_price() {
        assert_eq!(
            log_returns(&[1.0, f64::INFINITY]),
            Err(InputError::NonFinitePrice { index: 1 })
        );
    }

    #[test]
    fn test_single_price_still_validated() {
        assert!(log_returns(&[0.0]).is_err());
    }

    #[test]
    fn test_tail_window() {
        let r = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(tail(&r, 2), &[3.0, 4.0]);
        assert_eq!(tail(&r, 10), &r);
        assert!(tail(&r, 0).is_empty());
    }
}
