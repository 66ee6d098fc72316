//! Search facets applied before eligibility evaluation.
//!
//! The search form lets a visitor narrow results by job type and experience
//! level. Facets are plain title/field predicates and run before the region
//! rules; the core `filter` contract stays ZIP-only.

use serde::{Deserialize, Serialize};

use super::job::Job;

/// Job type facet from the search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobTypeFilter {
    /// No job type restriction.
    #[default]
    All,
    /// Over-the-road positions.
    Otr,
    /// Regional positions.
    Regional,
    /// Local and salaried positions.
    Local,
    /// Team driving positions.
    Team,
    /// Dedicated route positions.
    Dedicated,
    /// Flatbed positions.
    Flatbed,
}

impl JobTypeFilter {
    /// Returns true if the job's title matches this facet.
    ///
    /// Matching is a case-insensitive substring test against the title, the
    /// same way the search form classifies postings.
    pub fn matches(&self, job: &Job) -> bool {
        let title = job.title.to_lowercase();
        match self {
            JobTypeFilter::All => true,
            JobTypeFilter::Otr => title.contains("otr"),
            JobTypeFilter::Regional => title.contains("regional"),
            JobTypeFilter::Local => title.contains("local") || title.contains("salary"),
            JobTypeFilter::Team => title.contains("team"),
            JobTypeFilter::Dedicated => title.contains("route"),
            JobTypeFilter::Flatbed => title.contains("flatbed"),
        }
    }
}

/// Experience level facet from the search form.
///
/// Postings requiring "12+" months count as experienced; everything else
/// accepts recent graduates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceFilter {
    /// No experience restriction.
    #[default]
    All,
    /// Positions requiring 12+ months of experience.
    Experienced,
    /// Positions open to recent graduates.
    Recent,
}

impl ExperienceFilter {
    /// Returns true if the job's experience requirement matches this facet.
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            ExperienceFilter::All => true,
            ExperienceFilter::Experienced => job.experience.contains("12+"),
            ExperienceFilter::Recent => !job.experience.contains("12+"),
        }
    }
}
