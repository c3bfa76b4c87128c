//! Calculation logic for the Tuition Pricing Engine.
//!
//! This module contains all the calculation functions for producing a fee
//! quote, including subject resolution, base fee assignment with the class
//! base rate equal-split, frequency clamping and multiplier lookup, monetary
//! rounding, discount application, and quote assembly.

mod base_fee;
mod discount;
mod frequency;
mod quote;
mod rounding;
mod subject_resolution;

pub use base_fee::{
    BaseFeeAssignment, DEFAULT_HOURLY_FEE, DEFAULT_MONTHLY_FEE, assign_base_fees,
};
pub use discount::apply_discount;
pub use frequency::{
    DEFAULT_DAYS_PER_WEEK, MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK, clamp_days_per_week,
    frequency_multiplier,
};
pub use quote::calculate_quote;
pub use rounding::round_to_rupee;
pub use subject_resolution::resolve_subjects;
