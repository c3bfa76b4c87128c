//! Base monthly fee assignment.
//!
//! Determines the pre-frequency monthly and hourly fee for each resolved
//! subject. When the admin has configured a base rate for the class, that
//! total is split evenly across the resolved subjects; otherwise each subject
//! prices at its own catalog rate, with fixed defaults for unset rates.

use rust_decimal::Decimal;

use crate::models::{FeeLineItem, SubjectOffering};

use super::rounding::round_to_rupee;

/// Monthly fee used when an offering has no catalog rate and no class base
/// rate applies.
pub const DEFAULT_MONTHLY_FEE: i64 = 3000;

/// Hourly fee used when an offering has no catalog rate and no class base
/// rate applies.
pub const DEFAULT_HOURLY_FEE: i64 = 300;

/// The result of assigning base fees to the resolved subjects.
#[derive(Debug, Clone)]
pub struct BaseFeeAssignment {
    /// One line item per resolved subject, before frequency adjustment.
    pub line_items: Vec<FeeLineItem>,
    /// The class base rate that was split, when one applied.
    pub base_rate_used: Option<i64>,
}

/// Assigns a pre-frequency monthly and hourly fee to each resolved subject.
///
/// With a class base rate `B` and `N` resolved subjects, every subject
/// receives `round(B / N)` as its monthly fee; its hourly fee is the
/// offering's own hourly rate, or `round(perSubject / 10)` when unset.
/// Without a class base rate, each subject uses its catalog monthly/hourly
/// rates with [`DEFAULT_MONTHLY_FEE`] and [`DEFAULT_HOURLY_FEE`] as
/// fallbacks.
///
/// # Arguments
///
/// * `resolved` - The resolved subjects, in resolution order. An empty slice
///   yields an empty assignment; subject resolution rejects that case before
///   fees are assigned.
/// * `class_base` - The configured base rate for the class, if present
///
/// # Examples
///
/// ```
/// use tuition_engine::calculation::assign_base_fees;
/// use tuition_engine::models::{SubjectOffering, SubjectPricing};
///
/// let offerings = vec![SubjectOffering {
///     name: "Mathematics".to_string(),
///     class_level: "10".to_string(),
///     board: "CBSE".to_string(),
///     pricing: SubjectPricing::default(),
///     is_active: true,
/// }];
///
/// let assignment = assign_base_fees(&offerings, Some(9000));
/// assert_eq!(assignment.line_items[0].monthly_fee, 9000);
/// assert_eq!(assignment.base_rate_used, Some(9000));
/// ```
pub fn assign_base_fees(resolved: &[SubjectOffering], class_base: Option<i64>) -> BaseFeeAssignment {
    if resolved.is_empty() {
        return BaseFeeAssignment {
            line_items: Vec::new(),
            base_rate_used: None,
        };
    }

    match class_base {
        Some(base) => {
            let per_subject = round_to_rupee(
                Decimal::from(base) / Decimal::from(resolved.len() as u64),
            );
            let derived_hourly = round_to_rupee(Decimal::from(per_subject) / Decimal::TEN);

            let line_items = resolved
                .iter()
                .map(|offering| FeeLineItem {
                    subject: offering.name.clone(),
                    class_level: offering.class_level.clone(),
                    monthly_fee: per_subject,
                    hourly_fee: offering.pricing.hourly.unwrap_or(derived_hourly),
                })
                .collect();

            BaseFeeAssignment {
                line_items,
                base_rate_used: Some(base),
            }
        }
        None => {
            let line_items = resolved
                .iter()
                .map(|offering| FeeLineItem {
                    subject: offering.name.clone(),
                    class_level: offering.class_level.clone(),
                    monthly_fee: offering.pricing.monthly.unwrap_or(DEFAULT_MONTHLY_FEE),
                    hourly_fee: offering.pricing.hourly.unwrap_or(DEFAULT_HOURLY_FEE),
                })
                .collect();

            BaseFeeAssignment {
                line_items,
                base_rate_used: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectPricing;

    fn offering(name: &str, monthly: Option<i64>, hourly: Option<i64>) -> SubjectOffering {
        SubjectOffering {
            name: name.to_string(),
            class_level: "10".to_string(),
            board: "CBSE".to_string(),
            pricing: SubjectPricing { monthly, hourly },
            is_active: true,
        }
    }

    /// BF-001: class base rate splits evenly across subjects
    #[test]
    fn test_class_base_splits_evenly() {
        let resolved = vec![
            offering("Mathematics", Some(3500), Some(350)),
            offering("Physics", Some(3500), Some(350)),
            offering("Chemistry", Some(3500), Some(350)),
        ];

        let assignment = assign_base_fees(&resolved, Some(9000));

        assert_eq!(assignment.base_rate_used, Some(9000));
        assert_eq!(assignment.line_items.len(), 3);
        for line in &assignment.line_items {
            assert_eq!(line.monthly_fee, 3000);
        }
    }

    /// BF-002: uneven split rounds per subject
    #[test]
    fn test_uneven_split_rounds_per_subject() {
        let resolved = vec![
            offering("Mathematics", None, None),
            offering("Physics", None, None),
            offering("Chemistry", None, None),
        ];

        // 10000 / 3 = 3333.33..., every subject shows the same rounded share
        let assignment = assign_base_fees(&resolved, Some(10000));

        for line in &assignment.line_items {
            assert_eq!(line.monthly_fee, 3333);
        }
    }

    /// BF-003: hourly under a base rate prefers the offering's own rate
    #[test]
    fn test_hourly_prefers_offering_rate_under_base() {
        let resolved = vec![offering("Mathematics", Some(3500), Some(350))];

        let assignment = assign_base_fees(&resolved, Some(9000));

        assert_eq!(assignment.line_items[0].monthly_fee, 9000);
        assert_eq!(assignment.line_items[0].hourly_fee, 350);
    }

    /// BF-004: hourly under a base rate derives from the split when unset
    #[test]
    fn test_hourly_derives_from_split_when_unset() {
        let resolved = vec![
            offering("Mathematics", None, None),
            offering("Physics", None, None),
        ];

        let assignment = assign_base_fees(&resolved, Some(9000));

        // per-subject 4500, derived hourly 450
        assert_eq!(assignment.line_items[0].monthly_fee, 4500);
        assert_eq!(assignment.line_items[0].hourly_fee, 450);
    }

    /// BF-005: without a base rate, catalog rates apply
    #[test]
    fn test_no_base_uses_catalog_rates() {
        let resolved = vec![offering("Physics", Some(3500), Some(350))];

        let assignment = assign_base_fees(&resolved, None);

        assert_eq!(assignment.base_rate_used, None);
        assert_eq!(assignment.line_items[0].monthly_fee, 3500);
        assert_eq!(assignment.line_items[0].hourly_fee, 350);
    }

    /// BF-006: without a base rate, unset catalog rates fall back to defaults
    #[test]
    fn test_no_base_falls_back_to_defaults() {
        let resolved = vec![offering("Sanskrit", None, None)];

        let assignment = assign_base_fees(&resolved, None);

        assert_eq!(assignment.line_items[0].monthly_fee, DEFAULT_MONTHLY_FEE);
        assert_eq!(assignment.line_items[0].hourly_fee, DEFAULT_HOURLY_FEE);
    }

    #[test]
    fn test_line_items_preserve_resolution_order() {
        let resolved = vec![
            offering("Physics", Some(3500), None),
            offering("English", Some(3000), None),
        ];

        let assignment = assign_base_fees(&resolved, None);

        assert_eq!(assignment.line_items[0].subject, "Physics");
        assert_eq!(assignment.line_items[1].subject, "English");
    }

    #[test]
    fn test_empty_slice_yields_empty_assignment() {
        let assignment = assign_base_fees(&[], Some(9000));

        assert!(assignment.line_items.is_empty());
        assert_eq!(assignment.base_rate_used, None);
    }

    #[test]
    fn test_single_subject_takes_whole_base() {
        let resolved = vec![offering("Mathematics", None, None)];

        let assignment = assign_base_fees(&resolved, Some(9000));

        assert_eq!(assignment.line_items[0].monthly_fee, 9000);
        assert_eq!(assignment.line_items[0].hourly_fee, 900);
    }
}
