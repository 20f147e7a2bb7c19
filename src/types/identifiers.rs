//! Identifier types for the facility map browser
//!
//! Facility identifiers come straight from the bundled datasets as plain
//! integers; session identifiers tag one mounted screen instance in log
//! events.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a facility within one loaded collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub i64);

impl FacilityId {
    /// Wrap a raw dataset identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FAC_{}", self.0)
    }
}

impl From<i64> for FacilityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for one mounted map-screen instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SES_{}", self.0.simple())
    }
}
