//! The map screen
//!
//! `MapScreen` is the single owner of all mutable screen state: region,
//! active dataset, search text, filter panel, sheet controller, and the
//! submission machine. Everything runs on the caller's event loop; there is
//! no parallelism and therefore no locking. The rendering host consumes the
//! outputs (`region`, annotated facilities, snap points) as props.

use crate::error::{AppError, AppResult};
use crate::facility::{
    resolve_icon, DatasetStore, Facility, LabelProvider, MarkerIcon, SpaceTypeDescriptions,
};
use crate::filter::{AmenityVocabulary, FilterPanelState, FilterSnapshot, TagAddOutcome};
use crate::map::{GeolocationProvider, Region};
use crate::screen::sheet::{SheetController, SnapPoint};
use crate::screen::submission::SearchSubmission;
use crate::types::{AppConfig, DatasetKey, SessionId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// A facility joined with everything the marker layer needs
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedFacility {
    /// The underlying record
    pub facility: Facility,
    /// Resolved marker icon; `None` renders no icon overlay
    pub icon: Option<MarkerIcon>,
    /// Marker title from the description map; blank on a lookup miss
    pub marker_title: String,
}

/// The top-level map screen, owner of all mutable UI state
pub struct MapScreen<G: GeolocationProvider> {
    session_id: SessionId,
    config: AppConfig,
    provider: G,
    store: DatasetStore,
    active: DatasetKey,
    region: Option<Region>,
    search_text: String,
    filters: FilterPanelState,
    vocabulary: AmenityVocabulary,
    descriptions: SpaceTypeDescriptions,
    sheet: SheetController,
    submission: SearchSubmission,
    current_filters: Rc<RefCell<FilterSnapshot>>,
    mounted: bool,
}

impl<G: GeolocationProvider> fmt::Debug for MapScreen<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapScreen")
            .field("session_id", &self.session_id)
            .field("active", &self.active)
            .field("region", &self.region)
            .field("search_text", &self.search_text)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl<G: GeolocationProvider> MapScreen<G> {
    /// Assemble a screen over the bundled datasets and resources
    ///
    /// The description map and vocabulary load here, one-shot; a failed
    /// load degrades them for the whole session and is already logged.
    pub fn new(config: AppConfig, provider: G) -> AppResult<Self> {
        let store = DatasetStore::bundled()?;
        Ok(Self::with_store(config, provider, store))
    }

    /// Assemble a screen over an explicit dataset store (tests)
    pub fn with_store(config: AppConfig, provider: G, store: DatasetStore) -> Self {
        let current_filters = Rc::new(RefCell::new(FilterSnapshot::default()));
        let sink = Rc::clone(&current_filters);

        let mut filters = FilterPanelState::new();
        filters.set_observer(Box::new(move |snapshot| {
            *sink.borrow_mut() = snapshot.clone();
        }));

        let submission = SearchSubmission::new(config.submit_settle_ms);
        Self {
            session_id: SessionId::new(),
            config,
            provider,
            store,
            active: DatasetKey::Default,
            region: None,
            search_text: String::new(),
            filters,
            vocabulary: AmenityVocabulary::bundled(),
            descriptions: SpaceTypeDescriptions::load_bundled(),
            sheet: SheetController::new(),
            submission,
            current_filters,
            mounted: false,
        }
    }

    /// This screen instance's session ID
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The currently visible region, if one exists yet
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// The active dataset key
    pub fn active_dataset(&self) -> DatasetKey {
        self.active
    }

    /// The current search-bar text
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether a search submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting()
    }

    /// Whether the advanced-filter sheet is presented
    pub fn is_sheet_open(&self) -> bool {
        self.sheet.is_open()
    }

    /// The snap points the sheet host should offer right now
    pub fn snap_points(&self) -> &'static [SnapPoint] {
        self.sheet.snap_points()
    }

    /// The latest combined filter snapshot, as the parent holds it
    pub fn filter_snapshot(&self) -> FilterSnapshot {
        self.current_filters.borrow().clone()
    }

    /// The filter panel, for facet toggles and tag edits
    pub fn filters_mut(&mut self) -> &mut FilterPanelState {
        &mut self.filters
    }

    /// Read-only view of the filter panel
    pub fn filters(&self) -> &FilterPanelState {
        &self.filters
    }

    /// The live amenity suggestion list for the panel's current input
    pub fn amenity_suggestions(&self) -> Vec<&str> {
        self.filters.suggestions(&self.vocabulary)
    }

    /// Commit the panel's free-text input against the vocabulary
    pub fn submit_amenity_text(&mut self) -> Option<TagAddOutcome> {
        self.filters.submit_free_text(&self.vocabulary)
    }

    /// Mount the screen: request permission, fetch the position, register
    /// keyboard listeners
    ///
    /// On a denied permission the denial is logged and `region` stays unset;
    /// the host renders no map until a region exists.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.sheet.register_keyboard_listeners();
        info!(session = %self.session_id, "Map screen mounted");
        self.refresh_region_from_location();
    }

    /// Unmount the screen: deregister keyboard listeners
    ///
    /// Collaborator results delivered after this point are discarded by
    /// virtue of the instance no longer being driven.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.sheet.deregister_keyboard_listeners();
        info!(session = %self.session_id, "Map screen unmounted");
    }

    /// Whether the screen is mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Re-center the region on the device position (the location button)
    pub fn recenter_on_user(&mut self) {
        if !self.mounted {
            return;
        }
        self.refresh_region_from_location();
    }

    fn refresh_region_from_location(&mut self) {
        if !self.provider.request_permission().is_granted() {
            info!(session = %self.session_id, "Permission to access location was denied");
            return;
        }
        match self.provider.current_position() {
            Ok(position) => {
                self.region = Some(Region::around(position, self.config.region_delta));
                debug!(
                    session = %self.session_id,
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "Region centered on device position"
                );
            }
            Err(e) => {
                // Non-fatal: the region simply stays as it was
                warn!(session = %self.session_id, "Failed to read device position: {}", e);
            }
        }
    }

    /// The active facility collection, annotated for the marker layer
    pub fn annotated_facilities(&self) -> Vec<AnnotatedFacility> {
        self.store
            .collection(self.active)
            .facilities()
            .iter()
            .map(|facility| AnnotatedFacility {
                icon: resolve_icon(&facility.space_type),
                marker_title: self
                    .descriptions
                    .label(&facility.space_type)
                    .unwrap_or_default()
                    .to_string(),
                facility: facility.clone(),
            })
            .collect()
    }

    /// Update the search-bar text (per keystroke)
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Present the advanced-filter sheet (ignored while submitting)
    pub fn open_sheet(&mut self) -> bool {
        self.sheet.open()
    }

    /// Dismiss the advanced-filter sheet
    pub fn close_sheet(&mut self) {
        self.sheet.close();
    }

    /// Forward a keyboard-shown event to the sheet machine
    pub fn keyboard_shown(&mut self) {
        self.sheet.keyboard_shown();
    }

    /// Forward a keyboard-hidden event to the sheet machine
    pub fn keyboard_hidden(&mut self) {
        self.sheet.keyboard_hidden();
    }

    /// Submit the search bar at `now`
    ///
    /// Swaps the active collection to `searched`, overwrites the region with
    /// the fixed searched center, clears the search text, and force-closes
    /// the sheet until the submission settles. Ignored when already
    /// submitting or when the search text is empty. Cannot fail: both
    /// datasets are bundled.
    pub fn submit_search(&mut self, now: DateTime<Utc>) -> bool {
        if self.submission.is_submitting() {
            debug!(session = %self.session_id, "Submission already in flight; ignored");
            return false;
        }
        if self.search_text.trim().is_empty() {
            debug!(session = %self.session_id, "Empty search text; submission ignored");
            return false;
        }

        self.submission.begin(now);
        self.sheet.submission_started();
        self.active = DatasetKey::Searched;
        self.region = Some(Region::around(self.config.searched_center, self.config.region_delta));
        self.search_text.clear();
        info!(
            session = %self.session_id,
            dataset = %self.active,
            filters = ?self.filter_snapshot(),
            "Search submitted; facility collection swapped"
        );
        true
    }

    /// Advance time-driven state: settle a due submission
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.submission.tick(now) {
            self.sheet.submission_settled();
            debug!(session = %self.session_id, "Search submission settled");
        }
    }
}

/// Write annotated facilities to a JSONL file, one record per line
pub fn export_annotated_jsonl(path: &Path, facilities: &[AnnotatedFacility]) -> AppResult<()> {
    let file = File::create(path).map_err(|e| {
        AppError::export_error(format!("Failed to create export file '{}': {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    for annotated in facilities {
        let line = serde_json::to_string(annotated)?;
        writeln!(writer, "{}", line).map_err(|e| {
            AppError::export_error(format!("Failed to write export line: {}", e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| AppError::export_error(format!("Failed to flush export: {}", e)))?;
    info!("Wrote {} annotated facilities to {}", facilities.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Coordinate, StaticLocationProvider};
    use crate::types::FacilityId;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn granted_screen() -> MapScreen<StaticLocationProvider> {
        let provider = StaticLocationProvider::granted(Coordinate::new(24.7813, 121.0313));
        MapScreen::new(AppConfig::default(), provider).unwrap()
    }

    #[test]
    fn test_mount_sets_region_from_position() {
        let mut screen = granted_screen();
        assert!(screen.region().is_none());

        screen.mount();
        let region = screen.region().expect("region after mount");
        assert_eq!(region.latitude, 24.7813);
        assert_eq!(region.longitude, 121.0313);
        assert_eq!(region.latitude_delta, 0.01);
    }

    #[test]
    fn test_denied_permission_leaves_region_unset() {
        let provider = StaticLocationProvider::denied();
        let mut screen = MapScreen::new(AppConfig::default(), provider).unwrap();

        screen.mount();
        assert!(screen.region().is_none());
        // The screen still works without a region
        assert!(!screen.annotated_facilities().is_empty());
    }

    #[test]
    fn test_annotated_facilities_resolve_icons_and_titles() {
        let mut screen = granted_screen();
        screen.mount();

        let annotated = screen.annotated_facilities();
        let nursing = annotated
            .iter()
            .find(|a| a.facility.space_type == "nursing_room")
            .expect("a nursing room in the default dataset");
        assert_eq!(nursing.icon, Some(MarkerIcon::NursingRoom));
        assert!(!nursing.marker_title.is_empty());

        // The unrecognized category renders no icon and a blank title
        let unknown = annotated
            .iter()
            .find(|a| a.facility.space_type().is_none())
            .expect("an unrecognized category in the default dataset");
        assert_eq!(unknown.icon, None);
        assert_eq!(unknown.marker_title, "");
    }

    #[test]
    fn test_submit_search_swaps_dataset_and_region() {
        let mut screen = granted_screen();
        screen.mount();
        screen.set_search_text("台北車站");

        assert!(screen.submit_search(at(0)));

        assert_eq!(screen.active_dataset(), DatasetKey::Searched);
        assert_eq!(screen.search_text(), "");
        let region = screen.region().unwrap();
        assert_eq!(region.latitude, 25.0478);
        assert_eq!(region.longitude, 121.5171);

        let annotated = screen.annotated_facilities();
        assert!(annotated.iter().any(|a| a.facility.facility_id == FacilityId::new(101)));
    }

    #[test]
    fn test_empty_search_text_is_not_submitted() {
        let mut screen = granted_screen();
        screen.mount();

        assert!(!screen.submit_search(at(0)));
        assert_eq!(screen.active_dataset(), DatasetKey::Default);

        screen.set_search_text("   ");
        assert!(!screen.submit_search(at(0)));
        assert_eq!(screen.active_dataset(), DatasetKey::Default);
    }

    #[test]
    fn test_sheet_suppressed_while_submitting() {
        let mut screen = granted_screen();
        screen.mount();
        screen.open_sheet();
        screen.set_search_text("台北");

        screen.submit_search(at(0));
        assert!(!screen.is_sheet_open());
        assert!(screen.is_submitting());

        // Keyboard events and opens are ignored during the window
        screen.keyboard_shown();
        assert!(!screen.is_sheet_open());
        assert!(!screen.open_sheet());

        // A second submission is also ignored
        screen.set_search_text("再搜尋");
        assert!(!screen.submit_search(at(100)));

        screen.tick(at(300));
        assert!(!screen.is_submitting());
        assert!(screen.open_sheet());
    }

    #[test]
    fn test_filter_snapshot_tracks_panel_changes() {
        use crate::types::SpaceType;

        let mut screen = granted_screen();
        assert_eq!(screen.filter_snapshot(), FilterSnapshot::default());

        screen.filters_mut().toggle_space_type(SpaceType::AccessibleRestroom);
        assert!(!screen.filter_snapshot().space_types.contains(&SpaceType::AccessibleRestroom));

        screen.filters_mut().reset_all();
        assert_eq!(screen.filter_snapshot(), FilterSnapshot::default());
    }

    #[test]
    fn test_recenter_requires_mount() {
        let mut screen = granted_screen();
        screen.recenter_on_user();
        assert!(screen.region().is_none());

        screen.mount();
        screen.unmount();
        let before = screen.region();
        screen.recenter_on_user();
        assert_eq!(screen.region(), before);
    }

    #[test]
    fn test_amenity_suggestions_flow_through_screen() {
        let mut screen = granted_screen();
        screen.filters_mut().set_search_text("室");

        let suggestions = screen.amenity_suggestions();
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| s.contains('室')));

        let first = suggestions[0].to_string();
        screen.filters_mut().set_search_text(first.clone());
        assert_eq!(screen.submit_amenity_text(), Some(TagAddOutcome::Added));
        assert_eq!(screen.filters().amenities(), [first]);
    }
}
