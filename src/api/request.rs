//! Request types for the ZIP Code Eligibility Engine API.
//!
//! This module defines the JSON request structure for the `/search`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{ExperienceFilter, JobTypeFilter};

/// Request body for the `/search` endpoint.
///
/// The ZIP code arrives as a raw string and is validated by the handler;
/// invalid input never reaches the engine. Facets default to "all".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The visitor's ZIP code; must be exactly five ASCII digits.
    pub zip_code: String,
    /// Optional job type facet.
    #[serde(default)]
    pub job_type: JobTypeFilter,
    /// Optional experience facet.
    #[serde(default)]
    pub experience: ExperienceFilter,
}
