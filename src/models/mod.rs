//! Core data models for the ZIP Code Eligibility Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod facets;
mod job;
mod zip;

pub use facets::{ExperienceFilter, JobTypeFilter};
pub use job::{Job, JobId, RegionRestriction};
pub use zip::{StateCode, ZipCode, ZipRange};
