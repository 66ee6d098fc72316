//! ZIP code, state code, and ZIP range types.
//!
//! These are the geographic primitives every rule in the engine is written
//! against. A [`ZipCode`] is validated at construction so the evaluation
//! layers can assume well-formed five-digit input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A validated five-digit US ZIP code.
///
/// Construction is the only place ZIP input is checked; every rule layer
/// downstream assumes the invariant `^\d{5}$` holds. The numeric value is
/// computed once at construction and reused by all range tests.
///
/// # Example
///
/// ```
/// use job_eligibility_engine::models::ZipCode;
///
/// let zip: ZipCode = "31909".parse().unwrap();
/// assert_eq!(zip.value(), 31909);
/// assert_eq!(zip.as_str(), "31909");
///
/// assert!("1234".parse::<ZipCode>().is_err());
/// assert!("12a45".parse::<ZipCode>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode {
    digits: String,
    value: u32,
}

impl ZipCode {
    /// Returns the ZIP code as its original five-digit string.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the numeric value of the ZIP code (leading zeros dropped).
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl FromStr for ZipCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 5 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EngineError::InvalidZipCode {
                input: s.to_string(),
            });
        }
        // Five ASCII digits always parse into u32.
        let value = s.parse::<u32>().map_err(|_| EngineError::InvalidZipCode {
            input: s.to_string(),
        })?;
        Ok(Self {
            digits: s.to_string(),
            value,
        })
    }
}

impl TryFrom<String> for ZipCode {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ZipCode> for String {
    fn from(zip: ZipCode) -> Self {
        zip.digits
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// A USPS two-letter state code, or the empty sentinel meaning "unresolved".
///
/// An unresolved state is not an error: a valid ZIP may legitimately fall
/// outside every configured state range if the table is incomplete. The
/// sentinel then fails any non-empty allow-list check naturally.
///
/// # Example
///
/// ```
/// use job_eligibility_engine::models::StateCode;
///
/// let ga = StateCode::new("GA");
/// assert_eq!(ga.as_str(), "GA");
/// assert!(!ga.is_unresolved());
///
/// let none = StateCode::unresolved();
/// assert!(none.is_unresolved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(String);

impl StateCode {
    /// Creates a state code from a two-letter USPS abbreviation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the empty sentinel for a ZIP that maps to no configured state.
    pub fn unresolved() -> Self {
        Self(String::new())
    }

    /// Returns true if this is the empty "unresolved" sentinel.
    pub fn is_unresolved(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the state code as a string slice (empty when unresolved).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An inclusive numeric range over the five-digit ZIP space.
///
/// # Example
///
/// ```
/// use job_eligibility_engine::models::ZipRange;
///
/// let range = ZipRange { min: 30000, max: 31999 };
/// assert!(range.contains(30301));
/// assert!(range.contains(31999));
/// assert!(!range.contains(32000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRange {
    /// The inclusive lower bound.
    pub min: u32,
    /// The inclusive upper bound.
    pub max: u32,
}

impl ZipRange {
    /// Returns true if the numeric ZIP value falls within this range.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}
