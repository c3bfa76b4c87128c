//! Quote models for the Tuition Pricing Engine.
//!
//! This module contains the [`PricingQuote`] type and its line items, the
//! engine's only output. The quote is intended for direct serialization to a
//! JSON response body, so field names and numeric types are part of the
//! contract: downstream display logic formats them as currency.

use serde::{Deserialize, Serialize};

/// A single priced subject within a quote.
///
/// All monetary fields are whole-rupee amounts, rounded at the step that
/// produced them.
///
/// # Example
///
/// ```
/// use tuition_engine::models::FeeLineItem;
///
/// let line = FeeLineItem {
///     subject: "Mathematics".to_string(),
///     class_level: "10".to_string(),
///     monthly_fee: 3000,
///     hourly_fee: 300,
/// };
/// assert_eq!(line.monthly_fee, 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLineItem {
    /// The subject name.
    pub subject: String,
    /// The class level the subject was priced for.
    pub class_level: String,
    /// The monthly fee for this subject after frequency adjustment.
    pub monthly_fee: i64,
    /// The hourly fee for this subject. Not adjusted by frequency.
    pub hourly_fee: i64,
}

/// The complete result of a fee calculation.
///
/// Invariant: `subtotal` equals the sum of `line_items[..].monthly_fee`
/// exactly, and `final_amount = subtotal - discount`.
///
/// # Example
///
/// ```
/// use tuition_engine::models::{FeeLineItem, PricingQuote};
///
/// let quote = PricingQuote {
///     line_items: vec![FeeLineItem {
///         subject: "Physics".to_string(),
///         class_level: "9".to_string(),
///         monthly_fee: 3500,
///         hourly_fee: 350,
///     }],
///     subtotal: 3500,
///     discount: 0,
///     final_amount: 3500,
///     days_per_week: 3,
///     base_rate_used: None,
/// };
/// assert_eq!(quote.final_amount, quote.subtotal - quote.discount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuote {
    /// The priced subjects, in resolution order.
    pub line_items: Vec<FeeLineItem>,
    /// Sum of the adjusted monthly fees across all line items.
    pub subtotal: i64,
    /// The discount derived from the configured percentage.
    pub discount: i64,
    /// The amount payable: `subtotal - discount`.
    pub final_amount: i64,
    /// The clamped days-per-week value actually used.
    pub days_per_week: u8,
    /// The class base rate that was split across subjects, when one applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rate_used: Option<i64>,
}
