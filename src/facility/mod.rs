//! Facility records, datasets, icons, and labels
//!
//! This module owns everything about the facilities shown on the map:
//!
//! - **Facility**: the read-only record sourced from the bundled datasets
//! - **FacilityCollection / DatasetStore**: immutable snapshots swapped
//!   wholesale between `default` and `searched`
//! - **MarkerIcon**: icon resolution from the category key, with a silent
//!   no-icon fallback for unrecognized categories
//! - **Labels**: the dual label sources (compiled short labels, one-shot
//!   loaded descriptions) behind the [`LabelProvider`] seam

pub mod dataset;
pub mod icons;
pub mod labels;
pub mod model;

// Re-export all public types for convenience
pub use dataset::{DatasetStore, FacilityCollection, DEFAULT_FIXTURE, SEARCHED_FIXTURE};
pub use icons::{icon_for, resolve_icon, MarkerIcon};
pub use labels::{LabelProvider, SpaceTypeDescriptions, StaticSpaceTypeLabels, DESCRIPTIONS_FIXTURE};
pub use model::Facility;
