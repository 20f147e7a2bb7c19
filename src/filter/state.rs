//! Advanced-filter panel state
//!
//! [`FilterPanelState`] owns the user's current selections across the four
//! independent facet groups plus the in-progress amenity search text. It is
//! pure in-memory UI state: created with defaults when the advanced-search
//! sheet mounts, mutated only through the operations here, and rebuilt fresh
//! each launch. Every mutation of the facet collections notifies the
//! consumer-supplied observer synchronously, so the owning screen always
//! holds the latest combined snapshot.

use crate::filter::autocomplete::AmenityVocabulary;
use crate::types::{AccessMethod, SpaceSize, SpaceType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Hard cap on selected amenity tags
pub const MAX_AMENITY_TAGS: usize = 10;

/// Inline message shown when the amenity cap rejects an add
pub const CAPACITY_MESSAGE: &str = "最多只能加入 10 項設施條件";

/// The combined filter selections, as a parent screen holds them
///
/// This is the value a backend query would take; in the current scope it is
/// consumed only at search submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSnapshot {
    /// Selected space-type facet keys
    pub space_types: BTreeSet<SpaceType>,
    /// Selected access-method facet keys
    pub access_methods: BTreeSet<AccessMethod>,
    /// Selected space-size facet keys
    pub space_sizes: BTreeSet<SpaceSize>,
    /// Selected amenity tags in display (insertion) order
    pub amenities: Vec<String>,
}

impl Default for FilterSnapshot {
    fn default() -> Self {
        Self {
            space_types: SpaceType::ALL.into_iter().collect(),
            access_methods: AccessMethod::ALL.into_iter().collect(),
            space_sizes: SpaceSize::ALL.into_iter().collect(),
            amenities: Vec::new(),
        }
    }
}

/// Outcome of committing an amenity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAddOutcome {
    /// The tag was appended
    Added,
    /// The tag was already selected; the input was still cleared
    AlreadyPresent,
    /// The cap rejected the add; state unchanged apart from the message
    Rejected,
}

/// Synchronous observer of facet-collection changes
pub type FilterObserver = Box<dyn FnMut(&FilterSnapshot)>;

/// The advanced-filter sheet's mutable state
pub struct FilterPanelState {
    space_types: BTreeSet<SpaceType>,
    access_methods: BTreeSet<AccessMethod>,
    space_sizes: BTreeSet<SpaceSize>,
    amenities: Vec<String>,
    search_text: String,
    capacity_message: Option<&'static str>,
    observer: Option<FilterObserver>,
}

impl fmt::Debug for FilterPanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPanelState")
            .field("space_types", &self.space_types)
            .field("access_methods", &self.access_methods)
            .field("space_sizes", &self.space_sizes)
            .field("amenities", &self.amenities)
            .field("search_text", &self.search_text)
            .field("capacity_message", &self.capacity_message)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for FilterPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanelState {
    /// Create the state with every facet selected and no tags
    pub fn new() -> Self {
        let defaults = FilterSnapshot::default();
        Self {
            space_types: defaults.space_types,
            access_methods: defaults.access_methods,
            space_sizes: defaults.space_sizes,
            amenities: Vec::new(),
            search_text: String::new(),
            capacity_message: None,
            observer: None,
        }
    }

    /// Register the parent's observer and emit the current snapshot to it
    pub fn set_observer(&mut self, observer: FilterObserver) {
        self.observer = Some(observer);
        self.notify();
    }

    /// Selected space types
    pub fn space_types(&self) -> &BTreeSet<SpaceType> {
        &self.space_types
    }

    /// Selected access methods
    pub fn access_methods(&self) -> &BTreeSet<AccessMethod> {
        &self.access_methods
    }

    /// Selected space sizes
    pub fn space_sizes(&self) -> &BTreeSet<SpaceSize> {
        &self.space_sizes
    }

    /// Selected amenity tags in display order
    pub fn amenities(&self) -> &[String] {
        &self.amenities
    }

    /// The in-progress amenity search text
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The inline capacity message, if the cap rejected an add
    pub fn capacity_message(&self) -> Option<&'static str> {
        self.capacity_message
    }

    /// The combined selections as one value
    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            space_types: self.space_types.clone(),
            access_methods: self.access_methods.clone(),
            space_sizes: self.space_sizes.clone(),
            amenities: self.amenities.clone(),
        }
    }

    /// Symmetric membership toggle on the space-type facet
    pub fn toggle_space_type(&mut self, key: SpaceType) {
        if !self.space_types.remove(&key) {
            self.space_types.insert(key);
        }
        self.notify();
    }

    /// Symmetric membership toggle on the access-method facet
    pub fn toggle_access_method(&mut self, key: AccessMethod) {
        if !self.access_methods.remove(&key) {
            self.access_methods.insert(key);
        }
        self.notify();
    }

    /// Symmetric membership toggle on the space-size facet
    pub fn toggle_space_size(&mut self, key: SpaceSize) {
        if !self.space_sizes.remove(&key) {
            self.space_sizes.insert(key);
        }
        self.notify();
    }

    /// Update the amenity search text (per keystroke)
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// The live suggestion list for the current input and selection
    pub fn suggestions<'a>(&self, vocabulary: &'a AmenityVocabulary) -> Vec<&'a str> {
        vocabulary.suggestions(&self.search_text, &self.amenities)
    }

    /// Commit an amenity tag
    ///
    /// At the cap the add is rejected and the inline message set; otherwise
    /// the tag is appended if not already present and the in-progress input
    /// is cleared (the suggestion list follows the input).
    pub fn add_amenity_tag(&mut self, tag: &str) -> TagAddOutcome {
        if self.amenities.len() >= MAX_AMENITY_TAGS {
            self.capacity_message = Some(CAPACITY_MESSAGE);
            return TagAddOutcome::Rejected;
        }

        let outcome = if self.amenities.iter().any(|t| t == tag) {
            TagAddOutcome::AlreadyPresent
        } else {
            self.amenities.push(tag.to_string());
            TagAddOutcome::Added
        };
        self.search_text.clear();

        if outcome == TagAddOutcome::Added {
            self.notify();
        }
        outcome
    }

    /// Remove an amenity tag if present
    ///
    /// Dropping back under the cap clears the capacity message.
    pub fn remove_amenity_tag(&mut self, tag: &str) -> bool {
        let Some(pos) = self.amenities.iter().position(|t| t == tag) else {
            return false;
        };
        self.amenities.remove(pos);
        if self.amenities.len() < MAX_AMENITY_TAGS {
            self.capacity_message = None;
        }
        self.notify();
        true
    }

    /// Restore every facet to all-selected and drop all tags
    ///
    /// The in-progress search text is transient keystroke state and is left
    /// untouched.
    pub fn reset_all(&mut self) {
        self.space_types = SpaceType::ALL.into_iter().collect();
        self.access_methods = AccessMethod::ALL.into_iter().collect();
        self.space_sizes = SpaceSize::ALL.into_iter().collect();
        self.amenities.clear();
        self.capacity_message = None;
        self.notify();
    }

    /// Commit the free-text input if it exactly matches a live suggestion
    ///
    /// The comparison is case-insensitive against the current suggestion
    /// list; on a match the vocabulary's exact entry is committed. With no
    /// match this is a silent no-op and the input is retained.
    pub fn submit_free_text(&mut self, vocabulary: &AmenityVocabulary) -> Option<TagAddOutcome> {
        if self.search_text.is_empty() {
            return None;
        }
        let needle = self.search_text.to_lowercase();
        let matched = self
            .suggestions(vocabulary)
            .into_iter()
            .find(|candidate| candidate.to_lowercase() == needle)?;
        Some(self.add_amenity_tag(matched))
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer(&snapshot);
        }
    }
}
