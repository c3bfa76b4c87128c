//! Subject catalog for the Tuition Pricing Engine.
//!
//! The catalog holds the full list of subject offerings and answers the
//! lookup questions the rest of the system asks of it: which offerings exist
//! for a class level, which of them are active, and which class levels are
//! taught at all. Offerings keep their load order; anything wire-facing sorts
//! at the edge.

use crate::models::SubjectOffering;

/// An in-memory snapshot of the subject offering list.
///
/// The catalog itself is immutable once built; the pricing engine receives
/// class-filtered slices from it and applies its own active/selection
/// filtering on top.
///
/// # Example
///
/// ```
/// use tuition_engine::catalog::SubjectCatalog;
/// use tuition_engine::models::{SubjectOffering, SubjectPricing};
///
/// let catalog = SubjectCatalog::new(vec![SubjectOffering {
///     name: "Mathematics".to_string(),
///     class_level: "10".to_string(),
///     board: "CBSE".to_string(),
///     pricing: SubjectPricing::default(),
///     is_active: true,
/// }]);
///
/// assert_eq!(catalog.for_class("10").len(), 1);
/// assert!(catalog.for_class("3").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SubjectCatalog {
    offerings: Vec<SubjectOffering>,
}

impl SubjectCatalog {
    /// Creates a catalog from a list of offerings, preserving their order.
    pub fn new(offerings: Vec<SubjectOffering>) -> Self {
        Self { offerings }
    }

    /// Returns every offering in the catalog, active or not.
    pub fn offerings(&self) -> &[SubjectOffering] {
        &self.offerings
    }

    /// Returns the offerings for a class level, in catalog order.
    ///
    /// The result includes inactive offerings; the pricing engine filters
    /// those out itself during subject resolution.
    pub fn for_class(&self, class_level: &str) -> Vec<SubjectOffering> {
        self.offerings
            .iter()
            .filter(|o| o.class_level == class_level)
            .cloned()
            .collect()
    }

    /// Returns all active offerings, in catalog order.
    pub fn active(&self) -> Vec<&SubjectOffering> {
        self.offerings.iter().filter(|o| o.is_active).collect()
    }

    /// Returns the active offerings for a class level, in catalog order.
    pub fn active_for_class(&self, class_level: &str) -> Vec<&SubjectOffering> {
        self.offerings
            .iter()
            .filter(|o| o.is_active && o.class_level == class_level)
            .collect()
    }

    /// Returns the distinct class levels present in the catalog, sorted
    /// numerically ("2" before "10"). Non-numeric levels sort last.
    pub fn class_levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = Vec::new();
        for offering in &self.offerings {
            if !levels.contains(&offering.class_level) {
                levels.push(offering.class_level.clone());
            }
        }
        levels.sort_by_key(|level| (level.parse::<u32>().unwrap_or(u32::MAX), level.clone()));
        levels
    }

    /// Returns the number of offerings in the catalog.
    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    /// Returns true if the catalog holds no offerings.
    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectPricing;

    fn offering(name: &str, class_level: &str, is_active: bool) -> SubjectOffering {
        SubjectOffering {
            name: name.to_string(),
            class_level: class_level.to_string(),
            board: "CBSE".to_string(),
            pricing: SubjectPricing {
                monthly: Some(3000),
                hourly: Some(300),
            },
            is_active,
        }
    }

    fn sample_catalog() -> SubjectCatalog {
        SubjectCatalog::new(vec![
            offering("English", "9", true),
            offering("Mathematics", "9", true),
            offering("Sanskrit", "9", false),
            offering("English", "10", true),
            offering("Mathematics", "2", true),
        ])
    }

    #[test]
    fn test_for_class_returns_catalog_order_including_inactive() {
        let catalog = sample_catalog();
        let class_nine = catalog.for_class("9");

        let names: Vec<&str> = class_nine.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["English", "Mathematics", "Sanskrit"]);
    }

    #[test]
    fn test_for_class_unknown_class_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.for_class("12").is_empty());
    }

    #[test]
    fn test_active_excludes_inactive_offerings() {
        let catalog = sample_catalog();
        let active = catalog.active();

        assert_eq!(active.len(), 4);
        assert!(active.iter().all(|o| o.is_active));
    }

    #[test]
    fn test_active_for_class_excludes_inactive() {
        let catalog = sample_catalog();
        let active = catalog.active_for_class("9");

        let names: Vec<&str> = active.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["English", "Mathematics"]);
    }

    #[test]
    fn test_class_levels_sorted_numerically() {
        let catalog = sample_catalog();
        assert_eq!(catalog.class_levels(), vec!["2", "9", "10"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert!(SubjectCatalog::new(vec![]).is_empty());
    }
}
