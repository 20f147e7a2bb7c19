//! Screen-level state machines and orchestration
//!
//! This module owns the top-level map screen and the two small state
//! machines it drives:
//!
//! - **SheetController**: sheet visibility, keyboard visibility, snap
//!   points, and the submission suppression window
//! - **SearchSubmission**: the idle/submitting machine with its fixed
//!   settle delay
//! - **MapScreen**: the single owner of region, active dataset, search
//!   text, and filter state, exposing the props a presentation surface
//!   consumes

pub mod screen;
pub mod sheet;
pub mod submission;

// Re-export all public types for convenience
pub use screen::{export_annotated_jsonl, AnnotatedFacility, MapScreen};
pub use sheet::{SheetController, SnapPoint, SNAP_POINTS_DEFAULT, SNAP_POINTS_KEYBOARD};
pub use submission::SearchSubmission;
