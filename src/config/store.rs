//! In-memory store for the single active pricing configuration record.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::types::PricingConfig;

/// A partial update to the pricing configuration.
///
/// Fields left as `None` keep their current values, matching the admin
/// surface where base rates and the discount are edited independently.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    /// Replacement for the per-class base rate table.
    pub class_base: Option<HashMap<String, i64>>,
    /// Replacement for the discount percentage.
    pub discount_percent: Option<Decimal>,
}

/// Holds the at-most-one active [`PricingConfig`] record.
///
/// The record is created lazily on the first admin save and mutated only
/// through [`ConfigStore::update`]. Readers take a cloned snapshot, so the
/// pricing engine never observes a half-applied update and never holds the
/// lock while calculating.
///
/// # Example
///
/// ```
/// use tuition_engine::config::{ConfigStore, ConfigUpdate};
/// use std::collections::HashMap;
///
/// let store = ConfigStore::new(None);
/// assert!(store.get().is_none());
///
/// store.update(ConfigUpdate {
///     class_base: Some(HashMap::from([("10".to_string(), 9000)])),
///     discount_percent: None,
/// });
///
/// assert_eq!(store.get().unwrap().class_base_for("10"), Some(9000));
/// ```
#[derive(Debug)]
pub struct ConfigStore {
    record: RwLock<Option<PricingConfig>>,
}

impl ConfigStore {
    /// Creates a store, optionally seeded with a loaded configuration.
    pub fn new(initial: Option<PricingConfig>) -> Self {
        Self {
            record: RwLock::new(initial),
        }
    }

    /// Returns a snapshot of the active configuration, if one exists.
    pub fn get(&self) -> Option<PricingConfig> {
        self.record
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies a partial update, creating the record if none exists yet.
    ///
    /// Returns the saved configuration, with `updated_at` stamped.
    pub fn update(&self, update: ConfigUpdate) -> PricingConfig {
        let mut guard = self.record.write().unwrap_or_else(PoisonError::into_inner);

        let mut config = guard.take().unwrap_or_default();
        if let Some(class_base) = update.class_base {
            config.class_base = class_base;
        }
        if let Some(discount_percent) = update.discount_percent {
            config.discount_percent = discount_percent;
        }
        config.updated_at = Some(Utc::now());

        *guard = Some(config.clone());
        config
    }
}
