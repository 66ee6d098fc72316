//! Named interstate corridor predicates.

use crate::config::CorridorConfig;
use crate::models::{StateCode, ZipCode, ZipRange};

use super::state_resolver::StateResolver;

/// A named predicate admitting ZIPs along a highway-adjacent route.
///
/// A ZIP satisfies a corridor only if its resolved state is in the
/// corridor's state set AND its numeric value falls in one of the
/// corridor's ranges. The state test runs first so a ZIP from an unrelated
/// state short-circuits without scanning ranges.
#[derive(Debug, Clone)]
pub struct Corridor {
    name: String,
    states: Vec<StateCode>,
    ranges: Vec<ZipRange>,
}

impl Corridor {
    /// Returns the corridor's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests whether the ZIP lies on this corridor.
    pub fn matches(&self, zip: &ZipCode, resolver: &StateResolver) -> bool {
        let state = resolver.resolve(zip);
        if !self.states.contains(&state) {
            return false;
        }
        let value = zip.value();
        self.ranges.iter().any(|range| range.contains(value))
    }
}

impl From<CorridorConfig> for Corridor {
    fn from(config: CorridorConfig) -> Self {
        Self {
            name: config.name,
            states: config.states,
            ranges: config.ranges,
        }
    }
}

/// The static registry of all declared corridors.
///
/// Corridors are declared once at load time; there is no runtime mutation.
///
/// # Example
///
/// ```no_run
/// use job_eligibility_engine::config::ConfigLoader;
/// use job_eligibility_engine::matching::{CorridorCatalog, StateResolver};
///
/// let loader = ConfigLoader::load("./config/regions").unwrap();
/// let resolver = StateResolver::new(loader.config().states().to_vec());
/// let catalog = CorridorCatalog::new(loader.config().corridors().to_vec());
///
/// let zip = "75201".parse().unwrap(); // Dallas
/// assert!(catalog.matches("i35", &zip, &resolver));
/// assert!(catalog.any_matches(&zip, &resolver));
/// ```
#[derive(Debug, Clone)]
pub struct CorridorCatalog {
    corridors: Vec<Corridor>,
}

impl CorridorCatalog {
    /// Creates a catalog from corridor configuration.
    pub fn new(configs: Vec<CorridorConfig>) -> Self {
        Self {
            corridors: configs.into_iter().map(Corridor::from).collect(),
        }
    }

    /// Returns true if a corridor with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.corridors.iter().any(|c| c.name == name)
    }

    /// Tests the named corridor against the ZIP; false if the name is not
    /// registered.
    pub fn matches(&self, name: &str, zip: &ZipCode, resolver: &StateResolver) -> bool {
        self.corridors
            .iter()
            .find(|c| c.name == name)
            .is_some_and(|c| c.matches(zip, resolver))
    }

    /// Returns true if any registered corridor matches the ZIP.
    pub fn any_matches(&self, zip: &ZipCode, resolver: &StateResolver) -> bool {
        self.corridors
            .iter()
            .any(|c| c.matches(zip, resolver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn fixtures() -> (CorridorCatalog, StateResolver) {
        let loader = ConfigLoader::load("./config/regions").expect("Failed to load config");
        let resolver = StateResolver::new(loader.config().states().to_vec());
        let catalog = CorridorCatalog::new(loader.config().corridors().to_vec());
        (catalog, resolver)
    }

    fn zip(s: &str) -> ZipCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_co_001_dallas_zip_on_i35() {
        let (catalog, resolver) = fixtures();
        assert!(catalog.matches("i35", &zip("75201"), &resolver));
    }

    #[test]
    fn test_co_002_denver_zip_on_i70_but_not_i35() {
        let (catalog, resolver) = fixtures();
        assert!(catalog.matches("i70", &zip("80202"), &resolver));
        assert!(!catalog.matches("i35", &zip("80202"), &resolver));
    }

    #[test]
    fn test_co_003_state_check_short_circuits_range_scan() {
        let (catalog, resolver) = fixtures();
        // 30301 (GA) is outside every I-35 state even though numeric ranges
        // are irrelevant here; the state gate alone rejects it.
        assert!(!catalog.matches("i35", &zip("30301"), &resolver));
    }

    #[test]
    fn test_co_004_in_corridor_state_but_outside_ranges() {
        let (catalog, resolver) = fixtures();
        // Houston is in Texas but not on the declared I-35 ranges.
        assert!(!catalog.matches("i35", &zip("77001"), &resolver));
    }

    #[test]
    fn test_co_005_kansas_city_on_both_i35_and_i70() {
        let (catalog, resolver) = fixtures();
        let kc = zip("64108");
        assert!(catalog.matches("i35", &kc, &resolver));
        assert!(catalog.matches("i70", &kc, &resolver));
    }

    #[test]
    fn test_co_006_any_matches_over_all_corridors() {
        let (catalog, resolver) = fixtures();
        // Memphis sits only on the St. Louis-Memphis corridor.
        assert!(catalog.any_matches(&zip("38101"), &resolver));
        assert!(!catalog.matches("i35", &zip("38101"), &resolver));
        // Rural Montana is on no corridor.
        assert!(!catalog.any_matches(&zip("59001"), &resolver));
    }

    #[test]
    fn test_co_007_unknown_corridor_name_is_false() {
        let (catalog, resolver) = fixtures();
        assert!(!catalog.matches("i99", &zip("75201"), &resolver));
        assert!(!catalog.contains("i99"));
        assert!(catalog.contains("chi_min"));
    }

    #[test]
    fn test_co_008_chicago_on_chi_min_corridor() {
        let (catalog, resolver) = fixtures();
        assert!(catalog.matches("chi_min", &zip("60614"), &resolver));
        assert!(catalog.matches("chi_min", &zip("53202"), &resolver));
        // Minneapolis is on both chi_min and i35.
        assert!(catalog.matches("chi_min", &zip("55401"), &resolver));
        assert!(catalog.matches("i35", &zip("55401"), &resolver));
    }
}
