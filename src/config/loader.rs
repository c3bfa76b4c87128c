//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the subject
//! catalog and the optional pricing configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::catalog::SubjectCatalog;
use crate::error::{EngineError, EngineResult};

use super::types::{PricingConfig, SubjectsFile};

/// Loads and provides access to the tuition configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the subject catalog and the pricing configuration they contain.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tuition/
/// ├── subjects.yaml   # Subject catalog with fallback rates
/// └── pricing.yaml    # Admin pricing configuration (optional)
/// ```
///
/// `pricing.yaml` may be absent: the pricing configuration is created lazily
/// on the first admin save, so a fresh deployment starts without one.
///
/// # Example
///
/// ```no_run
/// use tuition_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tuition").unwrap();
/// println!("Loaded {} subject offerings", loader.catalog().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: SubjectCatalog,
    pricing: Option<PricingConfig>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tuition")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `subjects.yaml` is missing
    /// - Any present file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tuition_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tuition")?;
    /// # Ok::<(), tuition_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load subjects.yaml
        let subjects_path = path.join("subjects.yaml");
        let subjects_file = Self::load_yaml::<SubjectsFile>(&subjects_path)?;
        let catalog = SubjectCatalog::new(subjects_file.subjects);

        // Load pricing.yaml if present; no configuration is a valid state
        let pricing_path = path.join("pricing.yaml");
        let pricing = if pricing_path.exists() {
            Some(Self::load_yaml::<PricingConfig>(&pricing_path)?)
        } else {
            None
        };

        Ok(Self { catalog, pricing })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded subject catalog.
    pub fn catalog(&self) -> &SubjectCatalog {
        &self.catalog
    }

    /// Returns the loaded pricing configuration, if one was present.
    pub fn pricing(&self) -> Option<&PricingConfig> {
        self.pricing.as_ref()
    }

    /// Consumes the loader, yielding the catalog and pricing configuration.
    pub fn into_parts(self) -> (SubjectCatalog, Option<PricingConfig>) {
        (self.catalog, self.pricing)
    }
}
