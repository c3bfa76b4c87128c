//! Percentage discount application.
//!
//! The admin configures a single flat percentage applied to the quote
//! subtotal after frequency adjustment. There is no floor or ceiling on the
//! configured percentage.

use rust_decimal::Decimal;

use super::rounding::round_to_rupee;

/// Computes the discount amount for a subtotal.
///
/// A zero percentage yields a zero discount; any other percentage yields
/// `round(subtotal * percent / 100)`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tuition_engine::calculation::apply_discount;
///
/// assert_eq!(apply_discount(9000, Decimal::new(10, 0)), 900);
/// assert_eq!(apply_discount(9000, Decimal::ZERO), 0);
/// ```
pub fn apply_discount(subtotal: i64, discount_percent: Decimal) -> i64 {
    if discount_percent.is_zero() {
        return 0;
    }
    round_to_rupee(Decimal::from(subtotal) * discount_percent / Decimal::ONE_HUNDRED)
}
