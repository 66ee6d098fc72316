//! Configuration types for the eligibility rule set.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{JobId, StateCode, ZipCode, ZipRange};

/// One entry of the canonical state range table.
///
/// Table order is a behavioral contract: lookup is first-match-wins in
/// declaration order, and overlapping ranges exist in the data (the Texas
/// single-ZIP carve-outs sit inside Oklahoma's declared range).
#[derive(Debug, Clone, Deserialize)]
pub struct StateRangeEntry {
    /// The USPS state code this entry resolves to.
    pub code: StateCode,
    /// Inclusive ZIP ranges belonging to this state.
    pub ranges: Vec<ZipRange>,
}

/// States configuration file structure (`states.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct StatesConfig {
    /// Ordered state range entries.
    pub states: Vec<StateRangeEntry>,
}

/// A named interstate corridor predicate.
#[derive(Debug, Clone, Deserialize)]
pub struct CorridorConfig {
    /// Registry name (e.g. "i35").
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// States the corridor passes through; a ZIP outside these states can
    /// never match, regardless of its numeric value.
    pub states: Vec<StateCode>,
    /// ZIP ranges along the corridor.
    pub ranges: Vec<ZipRange>,
}

/// Corridors configuration file structure (`corridors.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CorridorsConfig {
    /// All registered corridors.
    pub corridors: Vec<CorridorConfig>,
}

/// A single hiring hub within a city zone.
#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    /// Hub city name.
    pub city: String,
    /// Hub state.
    pub state: StateCode,
    /// Advisory hiring radius in miles; metadata only, the boolean decision
    /// uses the declared ZIP range.
    pub radius_miles: u32,
    /// The ZIP range that stands in for the hub's catchment.
    pub range: ZipRange,
}

/// A named collection of hiring hubs.
#[derive(Debug, Clone, Deserialize)]
pub struct CityZoneConfig {
    /// Registry name (e.g. "met_express").
    pub name: String,
    /// The hubs in this zone.
    pub hubs: Vec<HubConfig>,
}

/// City zones configuration file structure (`city_zones.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CityZonesConfig {
    /// All registered zones.
    pub zones: Vec<CityZoneConfig>,
}

/// One term of a closed-region rule.
///
/// A term fires when the resolved state is in `states`, the ZIP falls in
/// `ranges` (or `ranges` is empty), and none of the carve-outs apply.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedRegionTermConfig {
    /// States this term closes.
    pub states: Vec<StateCode>,
    /// Optional ZIP sub-ranges narrowing the closure within the states.
    #[serde(default)]
    pub ranges: Vec<ZipRange>,
    /// ZIP ranges exempt from the closure.
    #[serde(default)]
    pub unless_ranges: Vec<ZipRange>,
    /// Corridors whose members are exempt from the closure.
    #[serde(default)]
    pub unless_corridors: Vec<String>,
}

/// A named carrier-specific closed-region rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedRegionConfig {
    /// Registry name (e.g. "usx_closed").
    pub name: String,
    /// The job ids this rule suppresses when it fires. A firing rule only
    /// affects these jobs, never all jobs in the closed region.
    pub affected_jobs: Vec<JobId>,
    /// Independent closure terms; the rule fires if any term fires.
    pub terms: Vec<ClosedRegionTermConfig>,
}

/// Closed regions configuration file structure (`closed_regions.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedRegionsConfig {
    /// All registered rules.
    pub rules: Vec<ClosedRegionConfig>,
}

/// One entry of the literal per-ZIP override table.
///
/// Every listed ZIP admits every listed title regardless of the job's
/// declared ZIP ranges, bypassing all further checks.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideEntryConfig {
    /// The ZIP codes this entry applies to.
    pub zip_codes: Vec<ZipCode>,
    /// The job titles always admitted for those ZIP codes.
    pub titles: Vec<String>,
}

/// Overrides configuration file structure (`overrides.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct OverridesConfig {
    /// All override entries.
    pub overrides: Vec<OverrideEntryConfig>,
}

/// The complete eligibility rule configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various YAML
/// files in a rule configuration directory.
#[derive(Debug, Clone)]
pub struct RegionConfig {
    states: Vec<StateRangeEntry>,
    corridors: Vec<CorridorConfig>,
    zones: Vec<CityZoneConfig>,
    closed_regions: Vec<ClosedRegionConfig>,
    overrides: Vec<OverrideEntryConfig>,
}

impl RegionConfig {
    /// Creates a new RegionConfig from its component parts.
    pub fn new(
        states: StatesConfig,
        corridors: CorridorsConfig,
        zones: CityZonesConfig,
        closed_regions: ClosedRegionsConfig,
        overrides: OverridesConfig,
    ) -> Self {
        Self {
            states: states.states,
            corridors: corridors.corridors,
            zones: zones.zones,
            closed_regions: closed_regions.rules,
            overrides: overrides.overrides,
        }
    }

    /// Returns the ordered state range table.
    pub fn states(&self) -> &[StateRangeEntry] {
        &self.states
    }

    /// Returns all registered corridors.
    pub fn corridors(&self) -> &[CorridorConfig] {
        &self.corridors
    }

    /// Returns all registered city zones.
    pub fn zones(&self) -> &[CityZoneConfig] {
        &self.zones
    }

    /// Returns all closed-region rules.
    pub fn closed_regions(&self) -> &[ClosedRegionConfig] {
        &self.closed_regions
    }

    /// Returns all override table entries.
    pub fn overrides(&self) -> &[OverrideEntryConfig] {
        &self.overrides
    }
}
