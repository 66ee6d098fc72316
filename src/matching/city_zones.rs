//! City-based hiring zones.

use crate::config::{CityZoneConfig, HubConfig};
use crate::models::{StateCode, ZipCode, ZipRange};

/// A single hiring hub: a city with an advisory radius and a ZIP range.
///
/// The radius is carried as metadata only; it does not participate in the
/// boolean decision. True radius-based geofencing would require distance
/// computation and is a documented extension, not covered here.
#[derive(Debug, Clone)]
pub struct Hub {
    /// Hub city name.
    pub city: String,
    /// Hub state.
    pub state: StateCode,
    /// Advisory hiring radius in miles (metadata only).
    pub radius_miles: u32,
    /// The ZIP range standing in for the hub's catchment.
    pub range: ZipRange,
}

impl From<HubConfig> for Hub {
    fn from(config: HubConfig) -> Self {
        Self {
            city: config.city,
            state: config.state,
            radius_miles: config.radius_miles,
            range: config.range,
        }
    }
}

/// A named collection of hiring hubs.
#[derive(Debug, Clone)]
pub struct CityZone {
    name: String,
    hubs: Vec<Hub>,
}

impl CityZone {
    /// Returns the zone's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hubs in this zone.
    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    /// Tests whether the ZIP falls within any hub's declared range.
    pub fn matches(&self, zip: &ZipCode) -> bool {
        let value = zip.value();
        self.hubs.iter().any(|hub| hub.range.contains(value))
    }
}

impl From<CityZoneConfig> for CityZone {
    fn from(config: CityZoneConfig) -> Self {
        Self {
            name: config.name,
            hubs: config.hubs.into_iter().map(Hub::from).collect(),
        }
    }
}

/// The static registry of all declared city zones.
///
/// Used as a membership escape hatch: a ZIP outside a job's declared ranges
/// is still admitted if it falls inside any hub of any zone.
#[derive(Debug, Clone)]
pub struct CityZoneCatalog {
    zones: Vec<CityZone>,
}

impl CityZoneCatalog {
    /// Creates a catalog from city zone configuration.
    pub fn new(configs: Vec<CityZoneConfig>) -> Self {
        Self {
            zones: configs.into_iter().map(CityZone::from).collect(),
        }
    }

    /// Returns true if the ZIP falls in any hub of any registered zone.
    pub fn any_zone_matches(&self, zip: &ZipCode) -> bool {
        self.zones.iter().any(|zone| zone.matches(zip))
    }
}
