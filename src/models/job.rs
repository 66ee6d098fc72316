//! Job posting model and per-job region restrictions.
//!
//! Jobs are loaded wholesale from an external JSON data source and are
//! immutable for the duration of one eligibility evaluation. The wire
//! format matches the job data files (camelCase field names).

use serde::{Deserialize, Serialize};

use super::zip::{StateCode, ZipRange};

/// Numeric identifier for a job posting, as used in the job data files.
pub type JobId = u32;

/// The eligibility rule bundle attached to a job posting.
///
/// Each dimension defaults to "no restriction" when absent or empty: an
/// empty `states` list allows all states, an empty `excluded_states` list
/// denies none, and an empty `zip_ranges` list disables the range check.
///
/// # Example
///
/// ```
/// use job_eligibility_engine::models::RegionRestriction;
///
/// let json = r#"{ "states": ["GA", "AL"], "zipRanges": [{ "min": 30000, "max": 31999 }] }"#;
/// let restriction: RegionRestriction = serde_json::from_str(json).unwrap();
/// assert_eq!(restriction.states.len(), 2);
/// assert!(restriction.excluded_states.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRestriction {
    /// State allow-list; empty means all states are allowed.
    #[serde(default)]
    pub states: Vec<StateCode>,
    /// State deny-list; empty means no states are denied.
    #[serde(default)]
    pub excluded_states: Vec<StateCode>,
    /// Ordered inclusive ZIP ranges; empty disables the range check.
    #[serde(default)]
    pub zip_ranges: Vec<ZipRange>,
}

/// A job posting as loaded from the job data file.
///
/// Immutable for the duration of one eligibility evaluation; the engine
/// never mutates job records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique numeric identifier.
    pub id: JobId,
    /// The job title shown to applicants.
    pub title: String,
    /// Human-readable hiring area description.
    pub location: String,
    /// Pay description (e.g. "$0.55 - $0.65 CPM").
    pub pay: String,
    /// Home time description (e.g. "Home weekly").
    pub home_time: String,
    /// Required experience description.
    pub experience: String,
    /// Equipment type (e.g. "53' Dry Van").
    pub equipment: String,
    /// Full description shown on the job card.
    pub description: String,
    /// Itemized requirements.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Featured jobs rank ahead of all non-featured jobs.
    #[serde(default)]
    pub featured: bool,
    /// Inactive jobs never reach the results.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Optional geographic eligibility rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_restriction: Option<RegionRestriction>,
    /// External application URL.
    pub apply_url: String,
}

fn default_active() -> bool {
    true
}
