//! Application state for the ZIP Code Eligibility Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::matching::EligibilityEngine;
use crate::store::JobStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// built eligibility engine and the job store.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<EligibilityEngine>,
    store: Arc<JobStore>,
}

impl AppState {
    /// Creates a new application state from a built engine and job store.
    pub fn new(engine: EligibilityEngine, store: JobStore) -> Self {
        Self {
            engine: Arc::new(engine),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the eligibility engine.
    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Returns a reference to the job store.
    pub fn store(&self) -> &JobStore {
        &self.store
    }
}
