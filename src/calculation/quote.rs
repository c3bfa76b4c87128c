//! Quote assembly.
//!
//! This is the engine's single entry point: it strings together subject
//! resolution, base fee assignment, frequency adjustment, and the discount
//! into a [`PricingQuote`]. The function is deterministic and side-effect
//! free; it operates on caller-supplied snapshots of the configuration and
//! catalog and performs no I/O.

use rust_decimal::Decimal;

use crate::config::PricingConfig;
use crate::error::EngineResult;
use crate::models::{FeeLineItem, PricingQuote, QuoteRequest, SubjectOffering};

use super::base_fee::assign_base_fees;
use super::discount::apply_discount;
use super::frequency::{clamp_days_per_week, frequency_multiplier};
use super::rounding::round_to_rupee;
use super::subject_resolution::resolve_subjects;

/// Calculates a tuition fee quote.
///
/// # Arguments
///
/// * `request` - The quote request (class level, selection, frequency)
/// * `config` - The pricing configuration snapshot, if one exists
/// * `offerings` - The catalog offerings for the request's class level; class
///   filtering is the catalog's job, active/selection filtering happens here
///
/// # Returns
///
/// Returns the complete [`PricingQuote`], or an error if:
/// - The selection is empty and `all_subjects` is false (`InvalidRequest`)
/// - Zero subjects resolve for the class and selection (`NotFound`)
///
/// No partial results are ever returned.
///
/// # Examples
///
/// ```
/// use tuition_engine::calculation::calculate_quote;
/// use tuition_engine::models::{QuoteRequest, SubjectOffering, SubjectPricing};
///
/// let offerings = vec![SubjectOffering {
///     name: "Physics".to_string(),
///     class_level: "9".to_string(),
///     board: "CBSE".to_string(),
///     pricing: SubjectPricing {
///         monthly: Some(3500),
///         hourly: Some(350),
///     },
///     is_active: true,
/// }];
///
/// let request = QuoteRequest {
///     class_level: "9".to_string(),
///     selected_subject_names: vec!["Physics".to_string()],
///     all_subjects: false,
///     days_per_week: Some(3),
/// };
///
/// let quote = calculate_quote(&request, None, &offerings).unwrap();
/// assert_eq!(quote.subtotal, 3500);
/// ```
pub fn calculate_quote(
    request: &QuoteRequest,
    config: Option<&PricingConfig>,
    offerings: &[SubjectOffering],
) -> EngineResult<PricingQuote> {
    let days_per_week = clamp_days_per_week(request.days_per_week);

    let resolved = resolve_subjects(request, offerings)?;

    let class_base = config.and_then(|c| c.class_base_for(&request.class_level));
    let assignment = assign_base_fees(&resolved, class_base);

    let multiplier = frequency_multiplier(days_per_week);
    let line_items: Vec<FeeLineItem> = assignment
        .line_items
        .into_iter()
        .map(|mut line| {
            line.monthly_fee = round_to_rupee(Decimal::from(line.monthly_fee) * multiplier);
            line
        })
        .collect();

    let subtotal: i64 = line_items.iter().map(|line| line.monthly_fee).sum();

    let discount = match config {
        Some(config) => apply_discount(subtotal, config.discount_percent),
        None => 0,
    };

    Ok(PricingQuote {
        line_items,
        subtotal,
        discount,
        final_amount: subtotal - discount,
        days_per_week,
        base_rate_used: assignment.base_rate_used,
    })
}
