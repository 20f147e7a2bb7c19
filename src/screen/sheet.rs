//! Advanced-filter bottom-sheet state machine
//!
//! One small machine owns sheet visibility, keyboard visibility, and the
//! submission suppression window, replacing scattered boolean flags. While a
//! search submission is in flight the sheet is force-closed and neither an
//! explicit open nor a keyboard-visibility event may reopen it.

use std::fmt;

/// A discrete height at which the bottom sheet can rest, in percent of
/// screen height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapPoint(pub u8);

impl fmt::Display for SnapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Snap points while the keyboard is hidden
pub const SNAP_POINTS_DEFAULT: &[SnapPoint] = &[SnapPoint(45), SnapPoint(90)];

/// Snap points while the keyboard is visible (the input must stay reachable)
pub const SNAP_POINTS_KEYBOARD: &[SnapPoint] = &[SnapPoint(90)];

/// State machine for the advanced-filter sheet
#[derive(Debug, Clone, Default)]
pub struct SheetController {
    open: bool,
    keyboard_visible: bool,
    suppressed: bool,
    listeners_registered: bool,
}

impl SheetController {
    /// A closed sheet with no listeners registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sheet is currently presented
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the soft keyboard is currently visible
    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    /// Whether a submission is holding the sheet closed
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Whether keyboard listeners are currently registered
    pub fn listeners_registered(&self) -> bool {
        self.listeners_registered
    }

    /// The snap points the host should offer right now
    pub fn snap_points(&self) -> &'static [SnapPoint] {
        if self.keyboard_visible {
            SNAP_POINTS_KEYBOARD
        } else {
            SNAP_POINTS_DEFAULT
        }
    }

    /// Register keyboard listeners (screen mount)
    pub fn register_keyboard_listeners(&mut self) {
        self.listeners_registered = true;
    }

    /// Deregister keyboard listeners (screen unmount)
    pub fn deregister_keyboard_listeners(&mut self) {
        self.listeners_registered = false;
        self.keyboard_visible = false;
    }

    /// Present the sheet; ignored while a submission suppresses it
    ///
    /// Returns whether the sheet is open afterwards.
    pub fn open(&mut self) -> bool {
        if !self.suppressed {
            self.open = true;
        }
        self.open
    }

    /// Dismiss the sheet
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Keyboard became visible
    ///
    /// Auto-presents the sheet for amenity typing, unless suppressed or the
    /// listeners are not registered (unmounted screens receive nothing).
    pub fn keyboard_shown(&mut self) {
        if !self.listeners_registered || self.suppressed {
            return;
        }
        self.keyboard_visible = true;
        self.open = true;
    }

    /// Keyboard was dismissed; the sheet stays where it is
    pub fn keyboard_hidden(&mut self) {
        if !self.listeners_registered {
            return;
        }
        self.keyboard_visible = false;
    }

    /// A search submission started: force-close and suppress reopening
    pub fn submission_started(&mut self) {
        self.open = false;
        self.suppressed = true;
    }

    /// The submission settled: the sheet may be opened again
    pub fn submission_settled(&mut self) {
        self.suppressed = false;
    }
}
