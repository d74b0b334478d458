//! Per-screen presentational state.
//!
//! Cursors, tab selections, and toggles are local to one screen but
//! owned by the engine so the TUI can render as a pure function of
//! `App`.

use agriview_types::ScreenKind;

use crate::data;

/// Overlay menu state: the highlighted destination.
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    cursor: usize,
}

impl MenuState {
    /// Menu destinations, in the order the menu lists them.
    #[must_use]
    pub fn destinations() -> &'static [ScreenKind] {
        &[
            ScreenKind::Dashboard,
            ScreenKind::Map,
            ScreenKind::Alerts,
            ScreenKind::Weather,
            ScreenKind::History,
            ScreenKind::Settings,
            ScreenKind::Help,
        ]
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> ScreenKind {
        Self::destinations()[self.cursor]
    }

    pub fn move_up(&mut self) {
        let len = Self::destinations().len();
        self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % Self::destinations().len();
    }
}

/// Dashboard state: which parcel card the cursor is on.
#[derive(Debug, Default, Clone)]
pub struct DashboardState {
    cursor: usize,
}

impl DashboardState {
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn highlighted_parcel(&self) -> &'static data::Parcel {
        &data::PARCELS[self.cursor]
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(data::PARCELS.len() - 1);
    }
}

/// Filter tab on the alert center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertsTab {
    #[default]
    All,
    Active,
    Resolved,
}

impl AlertsTab {
    #[must_use]
    pub fn all() -> &'static [AlertsTab] {
        &[AlertsTab::All, AlertsTab::Active, AlertsTab::Resolved]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AlertsTab::All => "All",
            AlertsTab::Active => "Active",
            AlertsTab::Resolved => "Resolved",
        }
    }

    #[must_use]
    pub fn next(self) -> AlertsTab {
        match self {
            AlertsTab::All => AlertsTab::Active,
            AlertsTab::Active => AlertsTab::Resolved,
            AlertsTab::Resolved => AlertsTab::All,
        }
    }

    #[must_use]
    pub fn prev(self) -> AlertsTab {
        match self {
            AlertsTab::All => AlertsTab::Resolved,
            AlertsTab::Active => AlertsTab::All,
            AlertsTab::Resolved => AlertsTab::Active,
        }
    }
}

/// Aggregation period on the history screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryPeriod {
    Day,
    #[default]
    Week,
    Month,
    Season,
}

impl HistoryPeriod {
    #[must_use]
    pub fn all() -> &'static [HistoryPeriod] {
        &[
            HistoryPeriod::Day,
            HistoryPeriod::Week,
            HistoryPeriod::Month,
            HistoryPeriod::Season,
        ]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HistoryPeriod::Day => "Day",
            HistoryPeriod::Week => "Week",
            HistoryPeriod::Month => "Month",
            HistoryPeriod::Season => "Season",
        }
    }

    #[must_use]
    pub fn next(self) -> HistoryPeriod {
        match self {
            HistoryPeriod::Day => HistoryPeriod::Week,
            HistoryPeriod::Week => HistoryPeriod::Month,
            HistoryPeriod::Month => HistoryPeriod::Season,
            HistoryPeriod::Season => HistoryPeriod::Day,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<HistoryPeriod> {
        Self::all().get(index).copied()
    }
}

/// Settings screen state: notification toggles and the row cursor.
///
/// Toggle state lives for the session only; nothing here persists.
#[derive(Debug, Clone)]
pub struct SettingsState {
    cursor: usize,
    push_notifications: bool,
    email_notifications: bool,
    sms_notifications: bool,
}

impl SettingsState {
    pub const ROWS: usize = 3;

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn push_notifications(&self) -> bool {
        self.push_notifications
    }

    #[must_use]
    pub fn email_notifications(&self) -> bool {
        self.email_notifications
    }

    #[must_use]
    pub fn sms_notifications(&self) -> bool {
        self.sms_notifications
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(Self::ROWS - 1);
    }

    /// Flip the toggle under the cursor.
    pub fn toggle_selected(&mut self) {
        match self.cursor {
            0 => self.push_notifications = !self.push_notifications,
            1 => self.email_notifications = !self.email_notifications,
            _ => self.sms_notifications = !self.sms_notifications,
        }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            cursor: 0,
            push_notifications: true,
            email_notifications: true,
            sms_notifications: false,
        }
    }
}

/// Parcel-detail state: whether the recommendation banner was
/// dismissed this session.
#[derive(Debug, Default, Clone)]
pub struct ParcelDetailState {
    recommendation_dismissed: bool,
}

impl ParcelDetailState {
    #[must_use]
    pub fn recommendation_visible(&self) -> bool {
        !self.recommendation_dismissed
    }

    pub fn dismiss_recommendation(&mut self) {
        self.recommendation_dismissed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertsTab, DashboardState, HistoryPeriod, MenuState, SettingsState};

    #[test]
    fn menu_cursor_wraps_both_directions() {
        let mut menu = MenuState::default();
        menu.move_up();
        assert_eq!(menu.cursor(), MenuState::destinations().len() - 1);
        menu.move_down();
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn dashboard_cursor_clamps_at_bounds() {
        let mut dash = DashboardState::default();
        dash.move_up();
        assert_eq!(dash.cursor(), 0);
        for _ in 0..10 {
            dash.move_down();
        }
        assert_eq!(dash.cursor(), crate::data::PARCELS.len() - 1);
    }

    #[test]
    fn alerts_tab_cycles() {
        let mut tab = AlertsTab::All;
        for _ in 0..AlertsTab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, AlertsTab::All);
        assert_eq!(AlertsTab::All.prev(), AlertsTab::Resolved);
    }

    #[test]
    fn history_period_round_trips_indices() {
        for (i, &period) in HistoryPeriod::all().iter().enumerate() {
            assert_eq!(HistoryPeriod::from_index(i), Some(period));
        }
        assert_eq!(HistoryPeriod::from_index(99), None);
    }

    #[test]
    fn settings_toggle_flips_row_under_cursor() {
        let mut settings = SettingsState::default();
        assert!(settings.push_notifications());
        settings.toggle_selected();
        assert!(!settings.push_notifications());

        settings.move_down();
        settings.move_down();
        assert!(!settings.sms_notifications());
        settings.toggle_selected();
        assert!(settings.sms_notifications());
    }
}
