//! Application state for the Tuition Pricing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::SubjectCatalog;
use crate::config::{ConfigLoader, ConfigStore};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// subject catalog (immutable after load) and the pricing configuration
/// store (mutated through the admin endpoints).
#[derive(Clone)]
pub struct AppState {
    /// The loaded subject catalog.
    catalog: Arc<SubjectCatalog>,
    /// The pricing configuration store.
    store: Arc<ConfigStore>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        let (catalog, pricing) = loader.into_parts();
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(ConfigStore::new(pricing)),
        }
    }

    /// Returns a reference to the subject catalog.
    pub fn catalog(&self) -> &SubjectCatalog {
        &self.catalog
    }

    /// Returns a reference to the pricing configuration store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }
}
