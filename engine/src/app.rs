//! The view controller: single source of truth for what is on screen.

use tracing::debug;

use agriview_types::{NavigationIntent, ParcelId, ScreenKind, ui::UiOptions};

use crate::config::AgriConfig;
use crate::nav::NavigationState;
use crate::ui::{
    AlertsTab, DashboardState, HistoryPeriod, MenuState, ParcelDetailState, SettingsState,
};

/// Application state: the navigation record plus per-screen view
/// state. Owned exclusively by the UI task; the TUI layer reads it to
/// render and forwards input back through the navigation operations.
///
/// Navigation is total: no operation here performs IO or can fail.
#[derive(Debug, Default)]
pub struct App {
    nav: NavigationState,
    menu: MenuState,
    dashboard: DashboardState,
    alerts_tab: AlertsTab,
    history_period: HistoryPeriod,
    settings: SettingsState,
    detail: ParcelDetailState,
    options: UiOptions,
    tick: usize,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial state from an optional config file.
    #[must_use]
    pub fn from_config(config: Option<&AgriConfig>) -> Self {
        let mut app = Self::new();
        if let Some(config) = config {
            app.options = config.ui_options();
            app.navigate_to(config.start_screen());
        }
        app
    }

    // ------------------------------------------------------------------
    // Navigation operations
    // ------------------------------------------------------------------

    /// Activate a screen. The parcel selection is left unchanged.
    pub fn navigate_to(&mut self, kind: ScreenKind) {
        debug!(screen = %kind, "navigate");
        self.nav.set_screen(kind);
    }

    /// Select a parcel and show it on the map. Always succeeds; the id
    /// is opaque to the controller and passed through unmodified.
    pub fn navigate_to_map(&mut self, parcel: ParcelId) {
        debug!(parcel = %parcel, "navigate to map");
        self.nav.select_parcel(parcel, ScreenKind::Map);
    }

    /// Select a parcel and show its detail screen.
    pub fn navigate_to_parcel_detail(&mut self, parcel: ParcelId) {
        debug!(parcel = %parcel, "navigate to parcel detail");
        self.nav.select_parcel(parcel, ScreenKind::ParcelDetail);
    }

    /// Idempotent.
    pub fn open_menu(&mut self) {
        self.nav.set_menu_open(true);
    }

    /// Idempotent.
    pub fn close_menu(&mut self) {
        self.nav.set_menu_open(false);
    }

    /// Menu-originated navigation: change screen and close the menu as
    /// one observable update. Rendering only happens between input
    /// events, so no intermediate state is ever visible.
    pub fn handle_menu_navigate(&mut self, kind: ScreenKind) {
        self.navigate_to(kind);
        self.close_menu();
    }

    /// Route any navigation intent to the operation it names.
    pub fn dispatch(&mut self, intent: NavigationIntent) {
        match intent {
            NavigationIntent::GoTo(kind) => {
                if self.menu_open() {
                    self.handle_menu_navigate(kind);
                } else {
                    self.navigate_to(kind);
                }
            }
            NavigationIntent::GoToMapFor(parcel) => self.navigate_to_map(parcel),
            NavigationIntent::GoToDetailFor(parcel) => self.navigate_to_parcel_detail(parcel),
            NavigationIntent::OpenMenu => self.open_menu(),
            NavigationIntent::CloseMenu => self.close_menu(),
        }
    }

    // ------------------------------------------------------------------
    // Navigation state accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn screen(&self) -> ScreenKind {
        self.nav.screen()
    }

    #[must_use]
    pub fn selected_parcel(&self) -> &ParcelId {
        self.nav.selected_parcel()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.nav.menu_open()
    }

    #[must_use]
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    // ------------------------------------------------------------------
    // Session lifecycle
    // ------------------------------------------------------------------

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    // ------------------------------------------------------------------
    // Per-screen view state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuState {
        &mut self.menu
    }

    /// Navigate to the destination highlighted in the menu.
    pub fn menu_activate(&mut self) {
        let destination = self.menu.selected();
        self.handle_menu_navigate(destination);
    }

    #[must_use]
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardState {
        &mut self.dashboard
    }

    /// Open the map for the parcel card under the dashboard cursor.
    pub fn view_highlighted_parcel_map(&mut self) {
        let id = ParcelId::new(self.dashboard.highlighted_parcel().id);
        self.navigate_to_map(id);
    }

    /// Open the detail screen for the parcel card under the dashboard
    /// cursor.
    pub fn view_highlighted_parcel_detail(&mut self) {
        let id = ParcelId::new(self.dashboard.highlighted_parcel().id);
        self.navigate_to_parcel_detail(id);
    }

    #[must_use]
    pub fn alerts_tab(&self) -> AlertsTab {
        self.alerts_tab
    }

    pub fn alerts_tab_next(&mut self) {
        self.alerts_tab = self.alerts_tab.next();
    }

    pub fn alerts_tab_prev(&mut self) {
        self.alerts_tab = self.alerts_tab.prev();
    }

    #[must_use]
    pub fn history_period(&self) -> HistoryPeriod {
        self.history_period
    }

    pub fn history_period_next(&mut self) {
        self.history_period = self.history_period.next();
    }

    pub fn set_history_period(&mut self, period: HistoryPeriod) {
        self.history_period = period;
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    #[must_use]
    pub fn parcel_detail(&self) -> &ParcelDetailState {
        &self.detail
    }

    pub fn parcel_detail_mut(&mut self) -> &mut ParcelDetailState {
        &mut self.detail
    }
}
