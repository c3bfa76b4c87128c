//! Configuration types for tuition pricing.
//!
//! This module contains the admin-editable pricing configuration that is
//! deserialized from YAML and mutated through the admin API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The admin-edited pricing configuration.
///
/// At most one active configuration record exists at a time. Absence of a
/// class level in `class_base` means "no override for this class" and is
/// distinct from any sentinel amount.
///
/// # Example
///
/// ```
/// use tuition_engine::config::PricingConfig;
/// use std::collections::HashMap;
///
/// let config = PricingConfig {
///     class_base: HashMap::from([("10".to_string(), 9000)]),
///     ..Default::default()
/// };
///
/// assert_eq!(config.class_base_for("10"), Some(9000));
/// assert_eq!(config.class_base_for("9"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Base monthly amount per class level, in whole rupees. Split evenly
    /// across the resolved subjects when present.
    #[serde(default)]
    pub class_base: HashMap<String, i64>,
    /// Percentage discount applied to the quote subtotal. Defaults to 0.
    #[serde(default)]
    pub discount_percent: Decimal,
    /// When the configuration was last saved through the admin API.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PricingConfig {
    /// Returns the base monthly amount configured for a class level, if any.
    pub fn class_base_for(&self, class_level: &str) -> Option<i64> {
        self.class_base.get(class_level).copied()
    }
}

/// The subject catalog file structure (`subjects.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectsFile {
    /// The subject offerings, in catalog order.
    pub subjects: Vec<crate::models::SubjectOffering>,
}
