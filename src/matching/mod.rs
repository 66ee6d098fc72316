//! Eligibility resolution and ranking logic.
//!
//! This module contains the layered rule evaluators that decide whether a
//! ZIP code qualifies for a job posting: ZIP-to-state resolution, corridor
//! predicates, city hiring zones, closed-region policies, the literal
//! per-ZIP override table, the eligibility engine composing them, and the
//! result ranker.

mod city_zones;
mod closed_regions;
mod corridors;
mod engine;
mod overrides;
mod ranking;
mod state_resolver;

pub use city_zones::{CityZone, CityZoneCatalog, Hub};
pub use closed_regions::{ClosedRegionPolicy, ClosedRegionRule, ClosedRegionTerm};
pub use corridors::{Corridor, CorridorCatalog};
pub use engine::EligibilityEngine;
pub use overrides::OverrideTable;
pub use ranking::rank;
pub use state_resolver::StateResolver;
