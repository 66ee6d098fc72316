//! ZIP Code Eligibility Engine for trucking job postings
//!
//! This crate decides, for a given US ZIP code, which job postings a visitor
//! is eligible to see and ranks them for display. Eligibility is resolved by
//! a layered rule evaluator: ZIP-to-state resolution, per-job state
//! allow/deny lists and ZIP ranges, named interstate corridor predicates,
//! city hiring zones, carrier-specific closed regions, and literal per-ZIP
//! override tables.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod store;
