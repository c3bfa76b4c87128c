//! Response types for the Tuition Pricing Engine API.
//!
//! This module defines the error response structures, the catalog listing
//! projections, and the configuration view returned by the admin endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::PricingConfig;
use crate::error::EngineError;
use crate::models::{SubjectOffering, SubjectPricing};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_REQUEST", message),
            },
            EngineError::NotFound { class_level } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NO_SUBJECTS_FOUND",
                    "No subjects found for the selected criteria",
                    format!(
                        "No active subjects matched the selection for class '{}'",
                        class_level
                    ),
                ),
            },
        }
    }
}

/// A catalog entry in the `GET /pricing` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingEntry {
    /// The subject name.
    pub name: String,
    /// The class level.
    #[serde(rename = "class")]
    pub class_level: String,
    /// The subject's fallback pricing.
    pub pricing: SubjectPricing,
}

impl From<&SubjectOffering> for PricingEntry {
    fn from(offering: &SubjectOffering) -> Self {
        Self {
            name: offering.name.clone(),
            class_level: offering.class_level.clone(),
            pricing: offering.pricing.clone(),
        }
    }
}

/// A catalog entry in the `GET /pricing/class/:class_level` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassPricingEntry {
    /// The subject name.
    pub name: String,
    /// The subject's fallback pricing.
    pub pricing: SubjectPricing,
}

impl From<&SubjectOffering> for ClassPricingEntry {
    fn from(offering: &SubjectOffering) -> Self {
        Self {
            name: offering.name.clone(),
            pricing: offering.pricing.clone(),
        }
    }
}

/// The pricing configuration as returned by the admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigView {
    /// Base monthly amounts per class level.
    pub class_base: HashMap<String, i64>,
    /// The discount percentage.
    pub discount_percent: Decimal,
    /// When the configuration was last saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<PricingConfig> for ConfigView {
    fn from(config: PricingConfig) -> Self {
        Self {
            class_base: config.class_base,
            discount_percent: config.discount_percent,
            updated_at: config.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let engine_error = EngineError::InvalidRequest {
            message: "Please select at least one subject".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_REQUEST");
        assert_eq!(api_error.error.message, "Please select at least one subject");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let engine_error = EngineError::NotFound {
            class_level: "10".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "NO_SUBJECTS_FOUND");
        assert_eq!(
            api_error.error.message,
            "No subjects found for the selected criteria"
        );
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_pricing_entry_projects_offering_fields() {
        let offering = SubjectOffering {
            name: "Physics".to_string(),
            class_level: "9".to_string(),
            board: "CBSE".to_string(),
            pricing: SubjectPricing {
                monthly: Some(3500),
                hourly: Some(350),
            },
            is_active: true,
        };

        let entry = PricingEntry::from(&offering);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"class\":\"9\""));
        assert!(!json.contains("board"));
        assert!(!json.contains("is_active"));
    }

    #[test]
    fn test_config_view_uses_camel_case() {
        let view = ConfigView::from(PricingConfig {
            class_base: HashMap::from([("10".to_string(), 9000)]),
            discount_percent: Decimal::from(10),
            updated_at: None,
        });

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"classBase\""));
        assert!(json.contains("\"discountPercent\""));
        assert!(!json.contains("updatedAt")); // Skipped when None
    }
}
