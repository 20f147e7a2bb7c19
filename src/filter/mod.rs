//! Advanced-filter state and amenity autocomplete
//!
//! This module owns the advanced-search sheet's state model:
//!
//! - **FilterPanelState**: the four independent facet groups, the capped
//!   amenity tag list, the in-progress search text, and the synchronous
//!   observer that keeps the parent screen's snapshot current
//! - **AmenityVocabulary**: the static amenity vocabulary with the
//!   suggestion computation

pub mod autocomplete;
pub mod state;

// Re-export all public types for convenience
pub use autocomplete::{AmenityVocabulary, VOCABULARY_FIXTURE};
pub use state::{
    FilterObserver, FilterPanelState, FilterSnapshot, TagAddOutcome, CAPACITY_MESSAGE,
    MAX_AMENITY_TAGS,
};
