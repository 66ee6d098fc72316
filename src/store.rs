//! The canonical job collection and its snapshot discipline.
//!
//! The store owns the live job collection. Readers take an immutable
//! snapshot; writers replace, append, or remove whole records. The
//! eligibility engine only ever receives a snapshot, never the live
//! collection, so a `filter` invocation can never observe a mid-evaluation
//! mutation.

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Job, JobId};

/// Job data file structure (`{"jobs": [...]}`).
#[derive(Debug, Deserialize)]
struct JobsFile {
    jobs: Vec<Job>,
}

/// Owns the canonical job collection.
///
/// Reads are copy-on-write snapshots: a snapshot taken before a write keeps
/// the pre-write collection alive until dropped.
///
/// # Example
///
/// ```no_run
/// use job_eligibility_engine::store::JobStore;
///
/// let store = JobStore::load("./data/jobs.json").unwrap();
/// let snapshot = store.snapshot();
/// println!("{} postings loaded", snapshot.len());
/// ```
#[derive(Debug)]
pub struct JobStore {
    jobs: RwLock<Arc<Vec<Job>>>,
}

impl JobStore {
    /// Creates a store over an in-memory collection.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: RwLock::new(Arc::new(jobs)),
        }
    }

    /// Loads the store from a JSON job data file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::JobDataNotFound`] if the file is missing and
    /// [`EngineError::JobDataParseError`] if it is not valid job JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::JobDataNotFound {
            path: path_str.clone(),
        })?;

        let file: JobsFile =
            serde_json::from_str(&content).map_err(|e| EngineError::JobDataParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self::new(file.jobs))
    }

    /// Returns an immutable snapshot of the current collection.
    pub fn snapshot(&self) -> Arc<Vec<Job>> {
        Arc::clone(&self.jobs.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Replaces the entire collection.
    pub fn replace(&self, jobs: Vec<Job>) {
        *self.jobs.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(jobs);
    }

    /// Appends a job to the collection.
    pub fn append(&self, job: Job) {
        let mut guard = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        let mut jobs = guard.as_ref().clone();
        jobs.push(job);
        *guard = Arc::new(jobs);
    }

    /// Removes the job with the given id. Returns true if a job was
    /// removed.
    pub fn remove(&self, id: JobId) -> bool {
        let mut guard = self.jobs.write().unwrap_or_else(|e| e.into_inner());
        if !guard.iter().any(|job| job.id == id) {
            return false;
        }
        let jobs = guard
            .as_ref()
            .iter()
            .filter(|job| job.id != id)
            .cloned()
            .collect();
        *guard = Arc::new(jobs);
        true
    }
}
