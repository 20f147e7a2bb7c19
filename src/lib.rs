//! Care-Facility Map Browser
//!
//! The state model of a mobile map-browsing application for care facilities
//! (nursing rooms, family restrooms, accessible restrooms). The crate owns
//! everything between the bundled datasets and the props a rendering host
//! consumes: facility collections, icon and label resolution, the
//! advanced-filter state, amenity autocomplete, and the search-submission
//! flow. Map rendering, gestures, and OS permissions stay outside as
//! injected collaborators.
//!
//! # Overview
//!
//! - **Static datasets**: two bundled facility collections (`default`,
//!   `searched`) swapped wholesale on search submission
//! - **Advanced filters**: four independent facet groups plus a capped,
//!   ordered amenity tag list with autocomplete
//! - **Screen orchestration**: region from a geolocation collaborator, a
//!   bottom-sheet state machine, and a two-state submission machine
//!
//! # Quick Start
//!
//! ```rust
//! use caremap::{AppConfig, Coordinate, MapScreen, StaticLocationProvider};
//!
//! let provider = StaticLocationProvider::granted(Coordinate::new(24.7813, 121.0313));
//! let mut screen = MapScreen::new(AppConfig::default(), provider)?;
//! screen.mount();
//!
//! for annotated in screen.annotated_facilities() {
//!     println!("{} ({:?})", annotated.facility.facility_name, annotated.icon);
//! }
//! # Ok::<(), caremap::AppError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`types`]: enums, identifiers, and configuration
//! - [`facility`]: records, datasets, icons, and labels
//! - [`filter`]: the advanced-filter state and amenity autocomplete
//! - [`map`]: region values and the geolocation seam
//! - [`screen`]: the map screen and its state machines
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod error;
pub mod facility;
pub mod filter;
pub mod logging;
pub mod map;
pub mod screen;
pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{
    AccessMethod,
    AppConfig,
    CliArgs,
    DatasetKey,
    // Identifiers
    FacilityId,
    SessionId,
    // Enums
    SpaceSize,
    SpaceType,
};

// Error handling and logging
pub use error::{AppError, AppResult};
pub use logging::LoggingConfig;

// Facility records, datasets, icons, and labels
pub use facility::{
    icon_for, resolve_icon, DatasetStore, Facility, FacilityCollection, LabelProvider, MarkerIcon,
    SpaceTypeDescriptions, StaticSpaceTypeLabels,
};

// Filter state and autocomplete
pub use filter::{
    AmenityVocabulary, FilterPanelState, FilterSnapshot, TagAddOutcome, CAPACITY_MESSAGE,
    MAX_AMENITY_TAGS,
};

// Region and geolocation
pub use map::{Coordinate, GeolocationProvider, PermissionStatus, Region, StaticLocationProvider};

// Screen orchestration
pub use screen::{
    export_annotated_jsonl, AnnotatedFacility, MapScreen, SearchSubmission, SheetController,
    SnapPoint, SNAP_POINTS_DEFAULT, SNAP_POINTS_KEYBOARD,
};
