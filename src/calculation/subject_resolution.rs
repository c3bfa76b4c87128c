//! Subject resolution.
//!
//! Turns a quote request plus the catalog offerings for its class level into
//! the concrete list of offerings to price. This is the entire failure
//! surface of the engine: an empty explicit selection is rejected up front,
//! and a selection that matches nothing is reported as not found.

use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::models::{QuoteRequest, SubjectOffering};

/// Resolves the set of offerings a quote request should price.
///
/// With `all_subjects`, every active offering for the class is resolved in
/// catalog order. Otherwise the selection list is walked in its given order
/// (first occurrence wins for duplicate names) and matched against active
/// offerings; names with no active offering are silently dropped.
///
/// # Arguments
///
/// * `request` - The quote request carrying the selection
/// * `offerings` - The catalog offerings for the request's class level
///
/// # Returns
///
/// Returns the resolved offerings in resolution order, or an error if:
/// - The selection is empty and `all_subjects` is false (`InvalidRequest`)
/// - Zero offerings survive resolution (`NotFound`)
///
/// # Examples
///
/// ```
/// use tuition_engine::calculation::resolve_subjects;
/// use tuition_engine::models::{QuoteRequest, SubjectOffering, SubjectPricing};
///
/// let offerings = vec![SubjectOffering {
///     name: "Physics".to_string(),
///     class_level: "9".to_string(),
///     board: "CBSE".to_string(),
///     pricing: SubjectPricing::default(),
///     is_active: true,
/// }];
///
/// let request = QuoteRequest {
///     class_level: "9".to_string(),
///     selected_subject_names: vec!["Physics".to_string()],
///     all_subjects: false,
///     days_per_week: None,
/// };
///
/// let resolved = resolve_subjects(&request, &offerings).unwrap();
/// assert_eq!(resolved.len(), 1);
/// ```
pub fn resolve_subjects(
    request: &QuoteRequest,
    offerings: &[SubjectOffering],
) -> EngineResult<Vec<SubjectOffering>> {
    let resolved: Vec<SubjectOffering> = if request.all_subjects {
        offerings.iter().filter(|o| o.is_active).cloned().collect()
    } else {
        if request.selected_subject_names.is_empty() {
            return Err(EngineError::InvalidRequest {
                message: "Please select at least one subject".to_string(),
            });
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut matched = Vec::new();
        for name in &request.selected_subject_names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            if let Some(offering) = offerings.iter().find(|o| o.is_active && o.name == *name) {
                matched.push(offering.clone());
            }
        }
        matched
    };

    if resolved.is_empty() {
        return Err(EngineError::NotFound {
            class_level: request.class_level.clone(),
        });
    }

    Ok(resolved)
}
