//! ZIP-to-state resolution over the canonical state range table.

use crate::config::StateRangeEntry;
use crate::models::{StateCode, ZipCode};

/// Maps a five-digit ZIP code to a USPS state code.
///
/// Resolution scans the state range table in its fixed declared order and
/// returns the state of the first range containing the ZIP's numeric value.
/// First-match-wins order is a behavioral contract, not an implementation
/// detail: overlapping ranges exist in the table and the declared order
/// decides which state claims them.
///
/// Resolution is a pure function, deterministic and total over all
/// five-digit integers. An unmapped ZIP resolves to the empty sentinel,
/// which is not an error.
///
/// # Example
///
/// ```no_run
/// use job_eligibility_engine::config::ConfigLoader;
/// use job_eligibility_engine::matching::StateResolver;
/// use job_eligibility_engine::models::StateCode;
///
/// let loader = ConfigLoader::load("./config/regions").unwrap();
/// let resolver = StateResolver::new(loader.config().states().to_vec());
///
/// let zip = "30301".parse().unwrap();
/// assert_eq!(resolver.resolve(&zip), StateCode::new("GA"));
/// ```
#[derive(Debug, Clone)]
pub struct StateResolver {
    table: Vec<StateRangeEntry>,
}

impl StateResolver {
    /// Creates a resolver over an ordered state range table.
    pub fn new(table: Vec<StateRangeEntry>) -> Self {
        Self { table }
    }

    /// Resolves a ZIP code to its state, or the empty sentinel if no
    /// declared range contains it.
    pub fn resolve(&self, zip: &ZipCode) -> StateCode {
        let value = zip.value();
        for entry in &self.table {
            if entry.ranges.iter().any(|range| range.contains(value)) {
                return entry.code.clone();
            }
        }
        StateCode::unresolved()
    }
}
