//! Weekly frequency clamping and multiplier lookup.
//!
//! Students pick how many days per week they want tuition; the monthly fee
//! scales with that frequency through a fixed multiplier table. Three days a
//! week is the neutral baseline.

use rust_decimal::Decimal;

/// The days-per-week value used when the request does not supply one.
pub const DEFAULT_DAYS_PER_WEEK: u8 = 3;

/// The lowest accepted days-per-week value.
pub const MIN_DAYS_PER_WEEK: u8 = 1;

/// The highest accepted days-per-week value.
pub const MAX_DAYS_PER_WEEK: u8 = 7;

/// Clamps a requested days-per-week value to the accepted range.
///
/// Missing values default to [`DEFAULT_DAYS_PER_WEEK`]; values below
/// [`MIN_DAYS_PER_WEEK`] or above [`MAX_DAYS_PER_WEEK`] land on the
/// respective bound.
///
/// # Examples
///
/// ```
/// use tuition_engine::calculation::clamp_days_per_week;
///
/// assert_eq!(clamp_days_per_week(Some(5)), 5);
/// assert_eq!(clamp_days_per_week(Some(0)), 1);
/// assert_eq!(clamp_days_per_week(Some(100)), 7);
/// assert_eq!(clamp_days_per_week(None), 3);
/// ```
pub fn clamp_days_per_week(requested: Option<i64>) -> u8 {
    match requested {
        None => DEFAULT_DAYS_PER_WEEK,
        Some(days) if days < i64::from(MIN_DAYS_PER_WEEK) => MIN_DAYS_PER_WEEK,
        Some(days) if days > i64::from(MAX_DAYS_PER_WEEK) => MAX_DAYS_PER_WEEK,
        Some(days) => days as u8,
    }
}

/// Returns the monthly-fee multiplier for a clamped days-per-week value.
///
/// The table is fixed: `{1: 0.6, 2: 0.75, 3: 1.0, 4: 1.2, 5: 1.4, 6: 1.6,
/// 7: 1.8}`. Values outside the table price at the neutral multiplier 1.0;
/// clamping keeps callers inside it.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use tuition_engine::calculation::frequency_multiplier;
///
/// assert_eq!(frequency_multiplier(1), Decimal::new(6, 1));
/// assert_eq!(frequency_multiplier(3), Decimal::ONE);
/// assert_eq!(frequency_multiplier(7), Decimal::new(18, 1));
/// ```
pub fn frequency_multiplier(days_per_week: u8) -> Decimal {
    match days_per_week {
        1 => Decimal::new(6, 1),
        2 => Decimal::new(75, 2),
        3 => Decimal::ONE,
        4 => Decimal::new(12, 1),
        5 => Decimal::new(14, 1),
        6 => Decimal::new(16, 1),
        7 => Decimal::new(18, 1),
        _ => Decimal::ONE,
    }
}
