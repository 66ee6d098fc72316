//! Carrier-specific closed-region rules.
//!
//! Some carriers will not hire out of specific regions even when a job's
//! own restriction bundle would admit the ZIP. Each rule independently
//! evaluates the ZIP and, when it fires, suppresses only the job ids it
//! names, never all jobs in the closed region.

use std::collections::HashSet;

use crate::config::{ClosedRegionConfig, ClosedRegionTermConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{JobId, StateCode, ZipCode, ZipRange};

use super::corridors::CorridorCatalog;
use super::state_resolver::StateResolver;

/// One independent closure term of a closed-region rule.
///
/// A term fires when the resolved state is in its state set, the ZIP falls
/// in its ranges (an empty range list closes the whole state), and no
/// carve-out applies. Carve-outs are explicit exceptions: ZIP ranges that
/// stay open, and corridors whose members stay open (e.g. a region closed
/// west of I-35 remains open for ZIPs on the corridor itself).
#[derive(Debug, Clone)]
pub struct ClosedRegionTerm {
    states: Vec<StateCode>,
    ranges: Vec<ZipRange>,
    unless_ranges: Vec<ZipRange>,
    unless_corridors: Vec<String>,
}

impl ClosedRegionTerm {
    fn fires(&self, zip: &ZipCode, resolver: &StateResolver, corridors: &CorridorCatalog) -> bool {
        let state = resolver.resolve(zip);
        if !self.states.contains(&state) {
            return false;
        }
        let value = zip.value();
        if !self.ranges.is_empty() && !self.ranges.iter().any(|r| r.contains(value)) {
            return false;
        }
        if self.unless_ranges.iter().any(|r| r.contains(value)) {
            return false;
        }
        if self
            .unless_corridors
            .iter()
            .any(|name| corridors.matches(name, zip, resolver))
        {
            return false;
        }
        true
    }
}

impl From<ClosedRegionTermConfig> for ClosedRegionTerm {
    fn from(config: ClosedRegionTermConfig) -> Self {
        Self {
            states: config.states,
            ranges: config.ranges,
            unless_ranges: config.unless_ranges,
            unless_corridors: config.unless_corridors,
        }
    }
}

/// A named closed-region rule with its set of affected job ids.
#[derive(Debug, Clone)]
pub struct ClosedRegionRule {
    name: String,
    affected_jobs: HashSet<JobId>,
    terms: Vec<ClosedRegionTerm>,
}

impl ClosedRegionRule {
    /// Returns the rule's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the region is closed for this ZIP (any term fires).
    pub fn is_closed(
        &self,
        zip: &ZipCode,
        resolver: &StateResolver,
        corridors: &CorridorCatalog,
    ) -> bool {
        self.terms
            .iter()
            .any(|term| term.fires(zip, resolver, corridors))
    }

    /// Returns true if this rule suppresses the given job.
    pub fn affects(&self, job_id: JobId) -> bool {
        self.affected_jobs.contains(&job_id)
    }
}

impl From<ClosedRegionConfig> for ClosedRegionRule {
    fn from(config: ClosedRegionConfig) -> Self {
        Self {
            name: config.name,
            affected_jobs: config.affected_jobs.into_iter().collect(),
            terms: config.terms.into_iter().map(ClosedRegionTerm::from).collect(),
        }
    }
}

/// The aggregate of all closed-region rules.
#[derive(Debug, Clone)]
pub struct ClosedRegionPolicy {
    rules: Vec<ClosedRegionRule>,
}

impl ClosedRegionPolicy {
    /// Creates a policy from closed-region configuration.
    pub fn new(configs: Vec<ClosedRegionConfig>) -> Self {
        Self {
            rules: configs.into_iter().map(ClosedRegionRule::from).collect(),
        }
    }

    /// Verifies that every corridor carve-out references a registered
    /// corridor. Called once when the engine is built so a dangling
    /// reference fails at load time rather than silently never matching.
    pub fn validate(&self, corridors: &CorridorCatalog) -> EngineResult<()> {
        for rule in &self.rules {
            for term in &rule.terms {
                for name in &term.unless_corridors {
                    if !corridors.contains(name) {
                        return Err(EngineError::UnknownCorridor {
                            rule: rule.name.clone(),
                            corridor: name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true if any rule naming this job fires for the ZIP.
    pub fn is_excluded(
        &self,
        job_id: JobId,
        zip: &ZipCode,
        resolver: &StateResolver,
        corridors: &CorridorCatalog,
    ) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.affects(job_id) && rule.is_closed(zip, resolver, corridors))
    }
}
