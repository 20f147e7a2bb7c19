//! Facility records
//!
//! A facility is a read-only point of interest sourced from the bundled
//! datasets. The `space_type` field carries the raw category key from the
//! data; records with an unrecognized key are kept and simply render without
//! an icon.

use crate::map::region::Coordinate;
use crate::types::{FacilityId, SpaceType};
use serde::{Deserialize, Serialize};

/// A point of interest with a category, coordinates, and display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique identifier within the loaded collection
    pub facility_id: FacilityId,
    /// Display name
    pub facility_name: String,
    /// Display address
    pub address: String,
    /// Raw category key; may be unrecognized
    pub space_type: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Facility {
    /// Parse the raw category key into the closed enumeration, if recognized
    pub fn space_type(&self) -> Option<SpaceType> {
        self.space_type.parse().ok()
    }

    /// The facility's position
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
