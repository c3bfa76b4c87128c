//! Subject offering model and related types.
//!
//! A subject offering is a (subject name, class level) pairing with its own
//! fallback pricing, independent of any class-wide base rate override.

use serde::{Deserialize, Serialize};

/// Fallback pricing attached to a subject offering.
///
/// Either rate may be unset, in which case the engine substitutes its
/// domain-wide defaults (see [`crate::calculation::DEFAULT_MONTHLY_FEE`] and
/// [`crate::calculation::DEFAULT_HOURLY_FEE`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPricing {
    /// The monthly fee in whole rupees, if set.
    #[serde(default)]
    pub monthly: Option<i64>,
    /// The hourly fee in whole rupees, if set.
    #[serde(default)]
    pub hourly: Option<i64>,
}

/// A subject offered for a specific class level.
///
/// Offerings are created and edited through admin catalog management; the
/// pricing engine only ever reads active offerings.
///
/// # Example
///
/// ```
/// use tuition_engine::models::{SubjectOffering, SubjectPricing};
///
/// let offering = SubjectOffering {
///     name: "Physics".to_string(),
///     class_level: "9".to_string(),
///     board: "CBSE".to_string(),
///     pricing: SubjectPricing {
///         monthly: Some(3500),
///         hourly: Some(350),
///     },
///     is_active: true,
/// };
/// assert_eq!(offering.class_level, "9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectOffering {
    /// The subject name (e.g., "Mathematics").
    pub name: String,
    /// The class level this offering belongs to ("1" through "12").
    #[serde(rename = "class")]
    pub class_level: String,
    /// The curriculum board (e.g., "CBSE").
    #[serde(default = "default_board")]
    pub board: String,
    /// Fallback pricing for this offering.
    #[serde(default)]
    pub pricing: SubjectPricing,
    /// Whether the offering is currently available to students.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_board() -> String {
    "CBSE".to_string()
}

fn default_is_active() -> bool {
    true
}
