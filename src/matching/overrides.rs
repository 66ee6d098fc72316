//! Literal per-ZIP override table.
//!
//! A handful of ZIP codes must always see specific postings even when the
//! posting's declared ZIP ranges would reject them. The table is consulted
//! only after a range check fails; a hit admits the job immediately,
//! bypassing all further checks including closed regions.

use std::collections::{HashMap, HashSet};

use crate::config::OverrideEntryConfig;
use crate::models::ZipCode;

/// Declarative ZIP → always-admitted-titles table.
///
/// # Example
///
/// ```no_run
/// use job_eligibility_engine::config::ConfigLoader;
/// use job_eligibility_engine::matching::OverrideTable;
///
/// let loader = ConfigLoader::load("./config/regions").unwrap();
/// let table = OverrideTable::new(loader.config().overrides().to_vec());
///
/// let zip = "31909".parse().unwrap();
/// assert!(table.admits(&zip, "Georgia OTR Driver"));
/// assert!(!table.admits(&zip, "Chicago to Omaha Route"));
/// ```
#[derive(Debug, Clone)]
pub struct OverrideTable {
    by_zip: HashMap<String, HashSet<String>>,
}

impl OverrideTable {
    /// Builds the table from override configuration entries. Titles from
    /// entries sharing a ZIP are merged.
    pub fn new(entries: Vec<OverrideEntryConfig>) -> Self {
        let mut by_zip: HashMap<String, HashSet<String>> = HashMap::new();
        for entry in entries {
            for zip in &entry.zip_codes {
                by_zip
                    .entry(zip.as_str().to_string())
                    .or_default()
                    .extend(entry.titles.iter().cloned());
            }
        }
        Self { by_zip }
    }

    /// Returns true if the override table names this title for this ZIP.
    pub fn admits(&self, zip: &ZipCode, title: &str) -> bool {
        self.by_zip
            .get(zip.as_str())
            .is_some_and(|titles| titles.contains(title))
    }
}
