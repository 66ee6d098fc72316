//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! eligibility rule set from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CityZonesConfig, ClosedRegionsConfig, CorridorsConfig, OverridesConfig, RegionConfig,
    StatesConfig,
};

/// Loads and provides access to the eligibility rule configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the aggregated [`RegionConfig`] the engine is built from.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/regions/
/// ├── states.yaml          # Canonical state range table (ordered)
/// ├── corridors.yaml       # Interstate corridor predicates
/// ├── city_zones.yaml      # City hiring zones
/// ├── closed_regions.yaml  # Carrier-specific closed regions
/// └── overrides.yaml       # Literal per-ZIP override table
/// ```
///
/// # Example
///
/// ```no_run
/// use job_eligibility_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/regions").unwrap();
/// let config = loader.config();
/// println!("State table entries: {}", config.states().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RegionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/regions")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use job_eligibility_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/regions")?;
    /// # Ok::<(), job_eligibility_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let states = Self::load_yaml::<StatesConfig>(&path.join("states.yaml"))?;
        let corridors = Self::load_yaml::<CorridorsConfig>(&path.join("corridors.yaml"))?;
        let zones = Self::load_yaml::<CityZonesConfig>(&path.join("city_zones.yaml"))?;
        let closed_regions =
            Self::load_yaml::<ClosedRegionsConfig>(&path.join("closed_regions.yaml"))?;
        let overrides = Self::load_yaml::<OverridesConfig>(&path.join("overrides.yaml"))?;

        let config = RegionConfig::new(states, corridors, zones, closed_regions, overrides);

        Ok(Self { config })
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

    /// Returns the underlying rule configuration.
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }
}
