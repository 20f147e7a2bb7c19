//! Space-type label sources
//!
//! Two label sources exist for the same three category keys, collapsed under
//! one capability: [`StaticSpaceTypeLabels`] carries the compiled short
//! labels shown inside the filter sheet, and [`SpaceTypeDescriptions`] holds
//! the longer marker-title descriptions loaded one-shot from a bundled
//! resource. A lookup miss is `None` and the caller shows a blank title;
//! a failed load leaves the description map empty for the whole session.

use crate::types::SpaceType;
use std::collections::HashMap;
use tracing::error;

/// Bundled JSON for the space-type description map
pub const DESCRIPTIONS_FIXTURE: &str = include_str!("../../fixtures/space_type_descriptions.json");

/// Lookup of a display string by category key
///
/// Misses are a valid outcome; callers must tolerate a blank title.
pub trait LabelProvider {
    /// The string associated with a raw category key, if any
    fn label(&self, key: &str) -> Option<&str>;
}

/// Compile-time short labels for the three known categories
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSpaceTypeLabels;

impl StaticSpaceTypeLabels {
    /// The short label for a recognized space type
    pub const fn label_for(space_type: SpaceType) -> &'static str {
        match space_type {
            SpaceType::NursingRoom => "哺乳室",
            SpaceType::FamilyRestroom => "親子廁所",
            SpaceType::AccessibleRestroom => "無障礙廁所",
        }
    }
}

impl LabelProvider for StaticSpaceTypeLabels {
    fn label(&self, key: &str) -> Option<&str> {
        key.parse::<SpaceType>().ok().map(Self::label_for)
    }
}

/// Longer descriptions loaded once from the bundled resource
///
/// The load happens at construction (first use). On failure the map stays
/// empty for the session with no retry; every title degrades to blank.
#[derive(Debug, Clone)]
pub struct SpaceTypeDescriptions {
    entries: HashMap<String, String>,
    load_failed: bool,
}

impl SpaceTypeDescriptions {
    /// Parse the bundled description resource
    pub fn load_bundled() -> Self {
        Self::from_json(DESCRIPTIONS_FIXTURE)
    }

    /// Parse a description map from raw JSON, degrading to empty on failure
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<HashMap<String, String>>(raw) {
            Ok(entries) => Self { entries, load_failed: false },
            Err(e) => {
                error!("Error loading space type descriptions: {}", e);
                Self { entries: HashMap::new(), load_failed: true }
            }
        }
    }

    /// An always-empty map, for hosts that skip descriptions
    pub fn empty() -> Self {
        Self { entries: HashMap::new(), load_failed: false }
    }

    /// Whether the one-shot load failed
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Number of loaded descriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no descriptions are available
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LabelProvider for SpaceTypeDescriptions {
    fn label(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
