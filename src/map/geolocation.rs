//! Geolocation collaborator seam
//!
//! The OS positioning service stays outside this crate. The screen talks to
//! it through [`GeolocationProvider`]; tests and the demo driver use the
//! deterministic [`StaticLocationProvider`].

use crate::error::{AppError, AppResult};
use crate::map::region::Coordinate;

/// Outcome of a location-permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user granted foreground location access
    Granted,
    /// The user declined; the map stays without a region
    Denied,
}

impl PermissionStatus {
    /// Whether the permission was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Source of the device position
///
/// Both operations are fire-and-forget from the screen's point of view:
/// there is no cancellation token, and a result delivered after the screen
/// unmounted is simply dropped by the caller.
pub trait GeolocationProvider {
    /// Ask the platform for foreground location permission
    fn request_permission(&mut self) -> PermissionStatus;

    /// Read the current device position
    fn current_position(&mut self) -> AppResult<Coordinate>;
}

/// A provider that answers from fixed data, for tests and the demo driver
#[derive(Debug, Clone)]
pub struct StaticLocationProvider {
    permission: PermissionStatus,
    position: Coordinate,
}

impl StaticLocationProvider {
    /// A provider that grants permission and reports `position`
    pub fn granted(position: Coordinate) -> Self {
        Self { permission: PermissionStatus::Granted, position }
    }

    /// A provider that denies permission
    pub fn denied() -> Self {
        Self { permission: PermissionStatus::Denied, position: Coordinate::new(0.0, 0.0) }
    }
}

impl GeolocationProvider for StaticLocationProvider {
    fn request_permission(&mut self) -> PermissionStatus {
        self.permission
    }

    fn current_position(&mut self) -> AppResult<Coordinate> {
        match self.permission {
            PermissionStatus::Granted => Ok(self.position),
            PermissionStatus::Denied => {
                Err(AppError::geolocation_error("Permission to access location was denied"))
            }
        }
    }
}
