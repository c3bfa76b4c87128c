//! Quote request model.
//!
//! This is the engine's input: it is deserialized directly from the
//! `/calculate` request body and never persisted.

use serde::{Deserialize, Serialize};

/// A request for a tuition fee quote.
///
/// # Example
///
/// ```
/// use tuition_engine::models::QuoteRequest;
///
/// let json = r#"{
///     "classLevel": "9",
///     "selectedSubjectNames": ["Physics", "Chemistry"],
///     "allSubjects": false,
///     "daysPerWeek": 5
/// }"#;
///
/// let request: QuoteRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.class_level, "9");
/// assert_eq!(request.days_per_week, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// The class level to price tuition for ("1" through "12").
    pub class_level: String,
    /// The subjects the student picked. Ignored when `all_subjects` is true.
    #[serde(default)]
    pub selected_subject_names: Vec<String>,
    /// When true, price every active subject in the catalog for the class.
    #[serde(default)]
    pub all_subjects: bool,
    /// Desired tuition days per week. Missing values default to 3 and
    /// out-of-range values are clamped to 1-7 before use.
    #[serde(default)]
    pub days_per_week: Option<i64>,
}
