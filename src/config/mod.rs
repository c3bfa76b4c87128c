//! Configuration loading and management for the Tuition Pricing Engine.
//!
//! This module provides functionality to load the subject catalog and the
//! admin pricing configuration from YAML files, and the in-memory store
//! through which the admin surface reads and updates the single active
//! pricing configuration record.
//!
//! # Example
//!
//! ```no_run
//! use tuition_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/tuition").unwrap();
//! if let Some(pricing) = loader.pricing() {
//!     println!("Discount: {}%", pricing.discount_percent);
//! }
//! ```

mod loader;
mod store;
mod types;

pub use loader::ConfigLoader;
pub use store::{ConfigStore, ConfigUpdate};
pub use types::{PricingConfig, SubjectsFile};
