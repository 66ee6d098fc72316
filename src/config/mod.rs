//! Configuration loading for the eligibility rule set.
//!
//! All rule data (the canonical state range table, corridors, city zones,
//! closed regions, and the per-ZIP override table) is declarative YAML
//! loaded at startup. Rules never mutate at runtime.
//!
//! # Example
//!
//! ```no_run
//! use job_eligibility_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/regions").unwrap();
//! println!("Loaded {} corridors", config.config().corridors().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CityZoneConfig, CityZonesConfig, ClosedRegionConfig, ClosedRegionTermConfig,
    ClosedRegionsConfig, CorridorConfig, CorridorsConfig, HubConfig, OverrideEntryConfig,
    OverridesConfig, RegionConfig, StateRangeEntry, StatesConfig,
};
