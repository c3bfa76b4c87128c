//! Monetary rounding.
//!
//! Every amount in a quote is rounded to a whole rupee at the step that
//! produced it (per-subject split, frequency adjustment, discount). Rounding
//! per step rather than once at the end keeps the displayed line items and
//! the subtotal in exact integer agreement.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole rupee, ties away from zero.
///
/// Amounts outside the `i64` range saturate at the bounds.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tuition_engine::calculation::round_to_rupee;
///
/// assert_eq!(round_to_rupee(Decimal::new(14995, 1)), 1500); // 1499.5
/// assert_eq!(round_to_rupee(Decimal::new(29994, 1)), 2999); // 2999.4
/// ```
pub fn round_to_rupee(amount: Decimal) -> i64 {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or_else(|| {
        if rounded.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_amounts_pass_through() {
        assert_eq!(round_to_rupee(dec("3000")), 3000);
        assert_eq!(round_to_rupee(dec("0")), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(round_to_rupee(dec("1800.4")), 1800);
        assert_eq!(round_to_rupee(dec("1800.6")), 1801);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_to_rupee(dec("0.5")), 1);
        assert_eq!(round_to_rupee(dec("1666.5")), 1667);
        assert_eq!(round_to_rupee(dec("-0.5")), -1);
    }

    #[test]
    fn test_thirds_round_correctly() {
        // 10000 / 3 = 3333.33...
        let third = dec("10000") / dec("3");
        assert_eq!(round_to_rupee(third), 3333);
    }
}
