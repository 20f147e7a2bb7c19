//! Enumeration types for the facility map browser
//!
//! This module contains all enumeration types used throughout the application,
//! including facility space types, access methods, space sizes, and dataset keys.
//! Every enumeration serializes as the snake_case key carried by the bundled
//! JSON fixtures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories of care facilities shown on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceType {
    /// Private space for nursing and pumping
    NursingRoom,
    /// Restroom sized for a parent with children
    FamilyRestroom,
    /// Barrier-free restroom
    AccessibleRestroom,
}

impl SpaceType {
    /// All space types in display order
    pub const ALL: [SpaceType; 3] =
        [SpaceType::NursingRoom, SpaceType::FamilyRestroom, SpaceType::AccessibleRestroom];

    /// The snake_case key used by fixtures and filter facets
    pub const fn key(&self) -> &'static str {
        match self {
            SpaceType::NursingRoom => "nursing_room",
            SpaceType::FamilyRestroom => "family_restroom",
            SpaceType::AccessibleRestroom => "accessible_restroom",
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SpaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nursing_room" => Ok(SpaceType::NursingRoom),
            "family_restroom" => Ok(SpaceType::FamilyRestroom),
            "accessible_restroom" => Ok(SpaceType::AccessibleRestroom),
            _ => Err(format!("Unknown space type: {}", s)),
        }
    }
}

/// How a facility is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMethod {
    /// Walk in, no formality
    OpenAccess,
    /// Sign in at a counter before use
    RegistrationRequired,
    /// A staff member unlocks the space
    StaffAssistance,
}

impl AccessMethod {
    /// All access methods in display order
    pub const ALL: [AccessMethod; 3] = [
        AccessMethod::OpenAccess,
        AccessMethod::RegistrationRequired,
        AccessMethod::StaffAssistance,
    ];

    /// The snake_case key used by filter facets
    pub const fn key(&self) -> &'static str {
        match self {
            AccessMethod::OpenAccess => "open_access",
            AccessMethod::RegistrationRequired => "registration_required",
            AccessMethod::StaffAssistance => "staff_assistance",
        }
    }
}

impl fmt::Display for AccessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AccessMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open_access" => Ok(AccessMethod::OpenAccess),
            "registration_required" => Ok(AccessMethod::RegistrationRequired),
            "staff_assistance" => Ok(AccessMethod::StaffAssistance),
            _ => Err(format!("Unknown access method: {}", s)),
        }
    }
}

/// Rough floor-area class of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceSize {
    /// Room for a stroller and company
    Spacious,
    /// Average single-user space
    Medium,
    /// Tight but usable
    Narrow,
}

impl SpaceSize {
    /// All space sizes in display order
    pub const ALL: [SpaceSize; 3] = [SpaceSize::Spacious, SpaceSize::Medium, SpaceSize::Narrow];

    /// The snake_case key used by filter facets
    pub const fn key(&self) -> &'static str {
        match self {
            SpaceSize::Spacious => "spacious",
            SpaceSize::Medium => "medium",
            SpaceSize::Narrow => "narrow",
        }
    }
}

impl fmt::Display for SpaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SpaceSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spacious" => Ok(SpaceSize::Spacious),
            "medium" => Ok(SpaceSize::Medium),
            "narrow" => Ok(SpaceSize::Narrow),
            _ => Err(format!("Unknown space size: {}", s)),
        }
    }
}

/// Which bundled facility collection is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKey {
    /// The collection shown before any search
    Default,
    /// The collection swapped in by a search submission
    Searched,
}

impl DatasetKey {
    /// The snake_case key naming the bundled collection
    pub const fn key(&self) -> &'static str {
        match self {
            DatasetKey::Default => "default",
            DatasetKey::Searched => "searched",
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DatasetKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(DatasetKey::Default),
            "searched" => Ok(DatasetKey::Searched),
            _ => Err(format!("Unknown dataset key: {}", s)),
        }
    }
}
