//! The eligibility engine composing all rule layers.

use crate::config::RegionConfig;
use crate::error::EngineResult;
use crate::models::{Job, StateCode, ZipCode};

use super::city_zones::CityZoneCatalog;
use super::closed_regions::ClosedRegionPolicy;
use super::corridors::CorridorCatalog;
use super::overrides::OverrideTable;
use super::state_resolver::StateResolver;

/// Decides, per job, whether a ZIP code qualifies.
///
/// The engine is a pure, stateless pipeline invoked once per query: it
/// holds only the immutable rule catalogs, performs no I/O, and keeps no
/// cross-call state, so concurrent evaluations against the same job
/// snapshot are safe without locking.
///
/// Checks run per job in a fixed precedence order with short-circuiting:
///
/// 1. A job with no region restriction is eligible; all remaining checks
///    (including closed regions) are skipped.
/// 2. A non-empty state allow-list missing the resolved state rejects.
/// 3. A non-empty state deny-list containing the resolved state rejects.
/// 4. With declared ZIP ranges, an out-of-range ZIP is re-admitted either
///    by the literal override table (which also bypasses the closed-region
///    check) or by corridor/city-zone membership; otherwise it rejects.
/// 5. A closed-region rule naming the job rejects it.
///
/// Later layers re-admitting a job rejected by the numeric range check is
/// a deliberate policy asymmetry and must be preserved.
///
/// # Example
///
/// ```no_run
/// use job_eligibility_engine::config::ConfigLoader;
/// use job_eligibility_engine::matching::EligibilityEngine;
///
/// let loader = ConfigLoader::load("./config/regions").unwrap();
/// let engine = EligibilityEngine::from_config(loader.config()).unwrap();
///
/// let zip = "31909".parse().unwrap();
/// let eligible = engine.filter(&zip, &[]);
/// assert!(eligible.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    resolver: StateResolver,
    corridors: CorridorCatalog,
    city_zones: CityZoneCatalog,
    closed_regions: ClosedRegionPolicy,
    overrides: OverrideTable,
}

impl EligibilityEngine {
    /// Builds the engine from loaded rule configuration.
    ///
    /// Fails if a closed-region rule references a corridor that is not
    /// registered in the corridor catalog.
    pub fn from_config(config: &RegionConfig) -> EngineResult<Self> {
        let resolver = StateResolver::new(config.states().to_vec());
        let corridors = CorridorCatalog::new(config.corridors().to_vec());
        let city_zones = CityZoneCatalog::new(config.zones().to_vec());
        let closed_regions = ClosedRegionPolicy::new(config.closed_regions().to_vec());
        let overrides = OverrideTable::new(config.overrides().to_vec());

        closed_regions.validate(&corridors)?;

        Ok(Self {
            resolver,
            corridors,
            city_zones,
            closed_regions,
            overrides,
        })
    }

    /// Resolves the ZIP's state via the canonical range table.
    pub fn resolve_state(&self, zip: &ZipCode) -> StateCode {
        self.resolver.resolve(zip)
    }

    /// Decides whether a single job is eligible for the ZIP.
    ///
    /// The job's `active` flag is not consulted here; [`filter`] drops
    /// inactive jobs before rule evaluation.
    ///
    /// [`filter`]: EligibilityEngine::filter
    pub fn is_eligible(&self, zip: &ZipCode, job: &Job) -> bool {
        let Some(restriction) = &job.region_restriction else {
            return true;
        };

        let state = self.resolver.resolve(zip);

        if !restriction.states.is_empty() && !restriction.states.contains(&state) {
            return false;
        }

        if !restriction.excluded_states.is_empty() && restriction.excluded_states.contains(&state) {
            return false;
        }

        if !restriction.zip_ranges.is_empty() {
            let value = zip.value();
            let in_range = restriction.zip_ranges.iter().any(|r| r.contains(value));
            if !in_range {
                if self.overrides.admits(zip, &job.title) {
                    // Literal override: accept immediately, bypassing the
                    // closed-region check.
                    return true;
                }
                if !self.corridors.any_matches(zip, &self.resolver)
                    && !self.city_zones.any_zone_matches(zip)
                {
                    return false;
                }
            }
        }

        !self
            .closed_regions
            .is_excluded(job.id, zip, &self.resolver, &self.corridors)
    }

    /// Returns the subsequence of active jobs eligible for the ZIP,
    /// original relative order preserved.
    pub fn filter(&self, zip: &ZipCode, jobs: &[Job]) -> Vec<Job> {
        jobs.iter()
            .filter(|job| job.active && self.is_eligible(zip, job))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{RegionRestriction, ZipRange};

    fn engine() -> EligibilityEngine {
        let loader = ConfigLoader::load("./config/regions").expect("Failed to load config");
        EligibilityEngine::from_config(loader.config()).expect("Failed to build engine")
    }

    fn zip(s: &str) -> ZipCode {
        s.parse().unwrap()
    }

    fn job(id: u32, title: &str, restriction: Option<RegionRestriction>) -> Job {
        Job {
            id,
            title: title.to_string(),
            location: "Test".to_string(),
            pay: "$0.60 CPM".to_string(),
            home_time: "Home weekly".to_string(),
            experience: "12+ months".to_string(),
            equipment: "53' Dry Van".to_string(),
            description: String::new(),
            requirements: vec![],
            featured: false,
            active: true,
            region_restriction: restriction,
            apply_url: "https://apply.example.com".to_string(),
        }
    }

    fn states(codes: &[&str]) -> Vec<StateCode> {
        codes.iter().map(|c| StateCode::new(*c)).collect()
    }

    // ==========================================================================
    // EE-001: unrestricted job is always eligible
    // ==========================================================================
    #[test]
    fn test_ee_001_no_restriction_always_eligible() {
        let engine = engine();
        let unrestricted = job(5, "National OTR Driver", None);
        for z in ["31909", "99999", "00042", "53202"] {
            assert!(engine.is_eligible(&zip(z), &unrestricted), "zip {}", z);
        }
    }

    // ==========================================================================
    // EE-002: unrestricted job skips the closed-region check too
    // ==========================================================================
    #[test]
    fn test_ee_002_no_restriction_skips_closed_regions() {
        let engine = engine();
        // Job 7 is named by the USX closed-region rule and Wisconsin is
        // closed, but a job without a restriction bundle never reaches
        // that check.
        let unrestricted = job(7, "OTR Dry Van Driver", None);
        assert!(engine.is_eligible(&zip("53202"), &unrestricted));
    }

    // ==========================================================================
    // EE-003: state allow-list
    // ==========================================================================
    #[test]
    fn test_ee_003_state_allow_list() {
        let engine = engine();
        let j = job(
            3,
            "Four-State Southeast Route",
            Some(RegionRestriction {
                states: states(&["GA", "AL", "TN", "SC"]),
                ..Default::default()
            }),
        );
        assert!(engine.is_eligible(&zip("30301"), &j)); // GA
        assert!(engine.is_eligible(&zip("35201"), &j)); // AL
        assert!(!engine.is_eligible(&zip("32801"), &j)); // FL
    }

    // ==========================================================================
    // EE-004: unresolved state fails a non-empty allow-list
    // ==========================================================================
    #[test]
    fn test_ee_004_unresolved_state_fails_allow_list() {
        let engine = engine();
        let j = job(
            3,
            "Four-State Southeast Route",
            Some(RegionRestriction {
                states: states(&["GA"]),
                ..Default::default()
            }),
        );
        assert!(!engine.is_eligible(&zip("00042"), &j));
    }

    // ==========================================================================
    // EE-005: state deny-list
    // ==========================================================================
    #[test]
    fn test_ee_005_state_deny_list() {
        let engine = engine();
        let j = job(
            9,
            "Team OTR Dry Van",
            Some(RegionRestriction {
                excluded_states: states(&["AK", "HI"]),
                ..Default::default()
            }),
        );
        assert!(!engine.is_eligible(&zip("99501"), &j)); // AK
        assert!(engine.is_eligible(&zip("30301"), &j)); // GA
    }

    // ==========================================================================
    // EE-006: unresolved state passes a deny-list
    // ==========================================================================
    #[test]
    fn test_ee_006_unmapped_zip_passes_deny_list() {
        let engine = engine();
        let j = job(
            20,
            "Upper Midwest Reefer",
            Some(RegionRestriction {
                excluded_states: states(&["WI"]),
                ..Default::default()
            }),
        );
        // 00042 is outside every declared state range; the empty resolved
        // state is not in the exclude list, so the job stays in.
        assert!(engine.is_eligible(&zip("00042"), &j));
    }

    // ==========================================================================
    // EE-007: ZIP range check
    // ==========================================================================
    #[test]
    fn test_ee_007_zip_range_check() {
        let engine = engine();
        let j = job(
            4,
            "Middle Tennessee Regional Driver",
            Some(RegionRestriction {
                states: states(&["TN"]),
                zip_ranges: vec![ZipRange {
                    min: 37000,
                    max: 37399,
                }],
                ..Default::default()
            }),
        );
        assert!(engine.is_eligible(&zip("37201"), &j)); // Nashville, in range
        assert!(engine.is_eligible(&zip("37399"), &j)); // upper bound inclusive
        // Chattanooga: TN but out of range, no override, no corridor or
        // city zone covers it.
        assert!(!engine.is_eligible(&zip("37402"), &j));
        // Johnson City: also TN, also out of range, also no fallback.
        assert!(!engine.is_eligible(&zip("37601"), &j));
    }

    // ==========================================================================
    // EE-008: override re-admits out-of-range ZIP
    // ==========================================================================
    #[test]
    fn test_ee_008_override_readmits_out_of_range_zip() {
        let engine = engine();
        let j = job(
            2,
            "Georgia OTR Driver",
            Some(RegionRestriction {
                states: states(&["GA"]),
                zip_ranges: vec![ZipRange {
                    min: 30000,
                    max: 30999,
                }],
                ..Default::default()
            }),
        );
        // 31909 fails the range check but the override table names this
        // title for it.
        assert!(engine.is_eligible(&zip("31909"), &j));
        // A GA ZIP without an override entry stays rejected.
        assert!(!engine.is_eligible(&zip("31520"), &j)); // Brunswick
    }

    // ==========================================================================
    // EE-009: override bypasses the closed-region check
    // ==========================================================================
    #[test]
    fn test_ee_009_override_bypasses_closed_region() {
        use crate::config::{
            CityZonesConfig, ClosedRegionConfig, ClosedRegionTermConfig, ClosedRegionsConfig,
            CorridorsConfig, OverrideEntryConfig, OverridesConfig, RegionConfig, StateRangeEntry,
            StatesConfig,
        };

        // Synthetic rule set: Georgia is closed for job 2, and the override
        // table names "Georgia OTR Driver" for ZIP 31909.
        let config = RegionConfig::new(
            StatesConfig {
                states: vec![StateRangeEntry {
                    code: StateCode::new("GA"),
                    ranges: vec![ZipRange {
                        min: 30000,
                        max: 31999,
                    }],
                }],
            },
            CorridorsConfig { corridors: vec![] },
            CityZonesConfig { zones: vec![] },
            ClosedRegionsConfig {
                rules: vec![ClosedRegionConfig {
                    name: "test_closed".to_string(),
                    affected_jobs: vec![2],
                    terms: vec![ClosedRegionTermConfig {
                        states: vec![StateCode::new("GA")],
                        ranges: vec![],
                        unless_ranges: vec![],
                        unless_corridors: vec![],
                    }],
                }],
            },
            OverridesConfig {
                overrides: vec![OverrideEntryConfig {
                    zip_codes: vec![zip("31909")],
                    titles: vec!["Georgia OTR Driver".to_string()],
                }],
            },
        );
        let engine = EligibilityEngine::from_config(&config).unwrap();

        let restriction = RegionRestriction {
            zip_ranges: vec![ZipRange {
                min: 30000,
                max: 30999,
            }],
            ..Default::default()
        };
        let overridden = job(2, "Georgia OTR Driver", Some(restriction.clone()));
        // 31909 fails the range check; the override accepts outright even
        // though the closed-region rule fires for job 2 in Georgia.
        assert!(engine.is_eligible(&zip("31909"), &overridden));

        // Without an override hit the closed region wins: 30500 is inside
        // the declared range, so step 4b never runs, and the rule rejects.
        assert!(!engine.is_eligible(&zip("30500"), &overridden));
    }

    // ==========================================================================
    // EE-010: corridor membership re-admits out-of-range ZIP
    // ==========================================================================
    #[test]
    fn test_ee_010_corridor_fallback_readmits() {
        let engine = engine();
        let j = job(
            11,
            "Chicago to St. Louis to Kansas City",
            Some(RegionRestriction {
                zip_ranges: vec![ZipRange {
                    min: 60000,
                    max: 60699,
                }],
                ..Default::default()
            }),
        );
        // Kansas City MO is out of the declared range but on I-35/I-70.
        assert!(engine.is_eligible(&zip("64108"), &j));
        // Rural Montana is out of range with no fallback.
        assert!(!engine.is_eligible(&zip("59001"), &j));
    }

    // ==========================================================================
    // EE-011: city zone membership re-admits out-of-range ZIP
    // ==========================================================================
    #[test]
    fn test_ee_011_city_zone_fallback_readmits() {
        let engine = engine();
        let j = job(
            12,
            "Northeast Regional Dry Van",
            Some(RegionRestriction {
                zip_ranges: vec![ZipRange {
                    min: 10000,
                    max: 14999,
                }],
                ..Default::default()
            }),
        );
        // Boston is out of the declared range but is a Met Express hub.
        assert!(engine.is_eligible(&zip("02101"), &j));
    }

    // ==========================================================================
    // EE-012: corridor fallback does not bypass closed regions
    // ==========================================================================
    #[test]
    fn test_ee_012_corridor_fallback_still_faces_closed_regions() {
        let engine = engine();
        // Milwaukee is on the chi_min corridor, so the range fallback
        // re-admits it; but Wisconsin is USX-closed and job 7 is named.
        let j = job(
            7,
            "OTR Dry Van Driver",
            Some(RegionRestriction {
                zip_ranges: vec![ZipRange {
                    min: 60000,
                    max: 60699,
                }],
                ..Default::default()
            }),
        );
        assert!(!engine.is_eligible(&zip("53202"), &j));
        // The same job stays open for a non-USX job id.
        let mut other = j.clone();
        other.id = 12;
        assert!(engine.is_eligible(&zip("53202"), &other));
    }

    // ==========================================================================
    // EE-013: in-range ZIP still faces the closed-region check
    // ==========================================================================
    #[test]
    fn test_ee_013_in_range_zip_faces_closed_regions() {
        let engine = engine();
        let j = job(
            1,
            "Southeast Regional Flatbed",
            Some(RegionRestriction {
                zip_ranges: vec![ZipRange {
                    min: 6000,
                    max: 6999,
                }],
                ..Default::default()
            }),
        );
        // New Haven is inside the declared range, but Connecticut is
        // Montgomery-closed for job 1.
        assert!(!engine.is_eligible(&zip("06511"), &j));
        // The NY border carve-out stays open.
        assert!(engine.is_eligible(&zip("06850"), &j));
    }

    // ==========================================================================
    // EE-014: filter preserves input order and drops inactive jobs
    // ==========================================================================
    #[test]
    fn test_ee_014_filter_preserves_order_and_drops_inactive() {
        let engine = engine();
        let mut inactive = job(30, "Inactive Posting", None);
        inactive.active = false;
        let jobs = vec![
            job(31, "B Job", None),
            inactive,
            job(32, "A Job", None),
        ];
        let result = engine.filter(&zip("30301"), &jobs);
        let ids: Vec<u32> = result.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![31, 32]);
    }

    // ==========================================================================
    // EE-015: filtering an already-filtered collection is idempotent
    // ==========================================================================
    #[test]
    fn test_ee_015_filter_is_idempotent() {
        let engine = engine();
        let jobs = vec![
            job(5, "National OTR Driver", None),
            job(
                3,
                "Four-State Southeast Route",
                Some(RegionRestriction {
                    states: states(&["GA", "AL", "TN", "SC"]),
                    ..Default::default()
                }),
            ),
            job(
                9,
                "Team OTR Dry Van",
                Some(RegionRestriction {
                    excluded_states: states(&["AK", "HI"]),
                    ..Default::default()
                }),
            ),
        ];
        let once = engine.filter(&zip("30301"), &jobs);
        let twice = engine.filter(&zip("30301"), &once);
        assert_eq!(once, twice);
    }

    // ==========================================================================
    // EE-016: empty result is a valid, non-error outcome
    // ==========================================================================
    #[test]
    fn test_ee_016_empty_result_is_valid() {
        let engine = engine();
        let j = job(
            13,
            "Chicago to Omaha Route",
            Some(RegionRestriction {
                states: states(&["IL", "IA", "NE"]),
                ..Default::default()
            }),
        );
        let result = engine.filter(&zip("30301"), &[j]);
        assert!(result.is_empty());
    }
}
