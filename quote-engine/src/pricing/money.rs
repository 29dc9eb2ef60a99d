//! Decimal conversion helpers
//!
//! Charges are computed in `Decimal` and handed out as `f64`. Nothing is
//! rounded here; rounding to cents is a display concern.

use rust_decimal::prelude::*;

/// Convert f64 to Decimal for calculation
///
/// Inputs are validated as finite and bounded before they reach this point.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 (unrounded)
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Fraction rendered as a percentage with one decimal place: 0.15 -> "15.0"
///
/// Halves round away from zero (0.0125 -> "1.3").
pub fn percent_one_dp(fraction: f64) -> String {
    let percent = (to_decimal(fraction) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}")
}

/// Fraction rendered as a percentage without trailing zeros: 0.08 -> "8"
pub fn percent_plain(fraction: f64) -> String {
    (to_decimal(fraction) * Decimal::ONE_HUNDRED)
        .normalize()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_non_finite_collapses_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_percent_labels() {
        assert_eq!(percent_one_dp(0.15), "15.0");
        assert_eq!(percent_one_dp(0.1), "10.0");
        assert_eq!(percent_one_dp(0.125), "12.5");
        assert_eq!(percent_one_dp(0.0125), "1.3");
        assert_eq!(percent_one_dp(0.0375), "3.8");
        assert_eq!(percent_plain(0.08), "8");
        assert_eq!(percent_plain(0.075), "7.5");
        assert_eq!(percent_plain(0.0), "0");
    }
}
