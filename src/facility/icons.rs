//! Marker icon resolution
//!
//! Each recognized space type maps to exactly one marker icon; anything else
//! resolves to no icon at all and the host renders a bare marker. Absence is
//! a valid, silent outcome, not an error.

use crate::types::SpaceType;
use serde::Serialize;
use std::fmt;

/// Handle to one of the bundled marker icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    /// Icon for nursing rooms
    NursingRoom,
    /// Icon for family restrooms
    FamilyRestroom,
    /// Icon for accessible restrooms
    AccessibleRestroom,
}

impl MarkerIcon {
    /// Path of the bundled SVG asset
    pub const fn asset_path(&self) -> &'static str {
        match self {
            MarkerIcon::NursingRoom => "assets/icons/space_type/nursing_room.svg",
            MarkerIcon::FamilyRestroom => "assets/icons/space_type/family_restroom.svg",
            MarkerIcon::AccessibleRestroom => "assets/icons/space_type/accessible_restroom.svg",
        }
    }

    /// Background color of the marker bubble
    pub const fn marker_color(&self) -> &'static str {
        match self {
            MarkerIcon::NursingRoom => "#d63384",
            MarkerIcon::FamilyRestroom => "#fd7e14",
            MarkerIcon::AccessibleRestroom => "#0d6efd",
        }
    }
}

impl fmt::Display for MarkerIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.asset_path())
    }
}

/// The icon for a recognized space type
pub const fn icon_for(space_type: SpaceType) -> MarkerIcon {
    match space_type {
        SpaceType::NursingRoom => MarkerIcon::NursingRoom,
        SpaceType::FamilyRestroom => MarkerIcon::FamilyRestroom,
        SpaceType::AccessibleRestroom => MarkerIcon::AccessibleRestroom,
    }
}

/// Resolve a raw category key to an icon
///
/// Unknown keys, including the empty string, resolve to `None`; the caller
/// renders no icon overlay in that case.
pub fn resolve_icon(space_type: &str) -> Option<MarkerIcon> {
    space_type.parse::<SpaceType>().ok().map(icon_for)
}
