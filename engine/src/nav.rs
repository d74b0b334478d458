//! The navigation record: the entire mutable state of the view
//! controller core.

use agriview_types::{ParcelId, ScreenKind};

/// Which screen is showing, which parcel is selected, and whether the
/// overlay menu is open.
///
/// Created once at session start and owned exclusively by
/// [`crate::App`]; every (screen, menu_open) combination is reachable
/// and legal, so transitions are plain field writes with no error
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    screen: ScreenKind,
    selected_parcel: ParcelId,
    menu_open: bool,
}

impl NavigationState {
    #[must_use]
    pub fn new(screen: ScreenKind, selected_parcel: ParcelId) -> Self {
        Self {
            screen,
            selected_parcel,
            menu_open: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    #[must_use]
    pub fn selected_parcel(&self) -> &ParcelId {
        &self.selected_parcel
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub(crate) fn set_screen(&mut self, screen: ScreenKind) {
        self.screen = screen;
    }

    /// Select a parcel and activate a parcel-scoped screen. The id is
    /// taken as-is; the core never validates parcel ids.
    pub(crate) fn select_parcel(&mut self, parcel: ParcelId, screen: ScreenKind) {
        self.selected_parcel = parcel;
        self.screen = screen;
    }

    pub(crate) fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ScreenKind::Dashboard, ParcelId::new("A"))
    }
}
