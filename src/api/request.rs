//! Request types for the Tuition Pricing Engine API.
//!
//! The `/calculate` endpoint deserializes straight into
//! [`crate::models::QuoteRequest`]; this module holds the admin
//! configuration update body.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::ConfigUpdate;

/// Request body for `POST /admin/pricing-config`.
///
/// Both fields are optional: an omitted field leaves the stored value
/// untouched, so base rates and the discount can be edited independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdateRequest {
    /// Replacement base monthly amounts per class level.
    #[serde(default)]
    pub class_base: Option<HashMap<String, i64>>,
    /// Replacement discount percentage.
    #[serde(default)]
    pub discount_percent: Option<Decimal>,
}

impl From<ConfigUpdateRequest> for ConfigUpdate {
    fn from(req: ConfigUpdateRequest) -> Self {
        ConfigUpdate {
            class_base: req.class_base,
            discount_percent: req.discount_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_full_update() {
        let json = r#"{
            "classBase": { "10": 9000, "6": 6000 },
            "discountPercent": 12.5
        }"#;

        let request: ConfigUpdateRequest = serde_json::from_str(json).unwrap();
        let class_base = request.class_base.as_ref().unwrap();
        assert_eq!(class_base.get("10"), Some(&9000));
        assert_eq!(class_base.get("6"), Some(&6000));
        assert_eq!(
            request.discount_percent,
            Some(Decimal::from_str("12.5").unwrap())
        );
    }

    #[test]
    fn test_deserialize_partial_update() {
        let json = r#"{ "discountPercent": 5 }"#;

        let request: ConfigUpdateRequest = serde_json::from_str(json).unwrap();
        assert!(request.class_base.is_none());
        assert_eq!(request.discount_percent, Some(Decimal::from(5)));
    }

    #[test]
    fn test_conversion_to_config_update() {
        let request = ConfigUpdateRequest {
            class_base: Some(HashMap::from([("1".to_string(), 5000)])),
            discount_percent: None,
        };

        let update: ConfigUpdate = request.into();
        assert_eq!(update.class_base.unwrap().get("1"), Some(&5000));
        assert!(update.discount_percent.is_none());
    }
}
