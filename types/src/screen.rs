use std::fmt;

use serde::{Deserialize, Serialize};

/// One full-viewport screen of the application. Exactly one is active
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenKind {
    Dashboard,
    Map,
    Alerts,
    ParcelDetail,
    Settings,
    Profile,
    Help,
    History,
    Weather,
}

impl ScreenKind {
    /// All screen kinds, in declaration order.
    #[must_use]
    pub fn all() -> &'static [ScreenKind] {
        &[
            ScreenKind::Dashboard,
            ScreenKind::Map,
            ScreenKind::Alerts,
            ScreenKind::ParcelDetail,
            ScreenKind::Settings,
            ScreenKind::Profile,
            ScreenKind::Help,
            ScreenKind::History,
            ScreenKind::Weather,
        ]
    }

    /// Display title used by headers and the overlay menu.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Dashboard => "Dashboard",
            ScreenKind::Map => "Field Map",
            ScreenKind::Alerts => "Alert Center",
            ScreenKind::ParcelDetail => "Parcel Detail",
            ScreenKind::Settings => "Settings",
            ScreenKind::Profile => "Profile",
            ScreenKind::Help => "Help",
            ScreenKind::History => "History & Analysis",
            ScreenKind::Weather => "Farm Weather",
        }
    }

    /// Stable identifier used in config files and logs.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ScreenKind::Dashboard => "dashboard",
            ScreenKind::Map => "map",
            ScreenKind::Alerts => "alerts",
            ScreenKind::ParcelDetail => "parcel_detail",
            ScreenKind::Settings => "settings",
            ScreenKind::Profile => "profile",
            ScreenKind::Help => "help",
            ScreenKind::History => "history",
            ScreenKind::Weather => "weather",
        }
    }

    /// Parse a screen identifier. Unrecognized values resolve to
    /// [`ScreenKind::Dashboard`]: navigation is default-safe, never an
    /// error.
    #[must_use]
    pub fn from_slug(raw: &str) -> ScreenKind {
        match raw.trim().to_ascii_lowercase().as_str() {
            "map" => ScreenKind::Map,
            "alerts" => ScreenKind::Alerts,
            "parcel_detail" | "parcel-detail" => ScreenKind::ParcelDetail,
            "settings" => ScreenKind::Settings,
            "profile" => ScreenKind::Profile,
            "help" => ScreenKind::Help,
            "history" => ScreenKind::History,
            "weather" => ScreenKind::Weather,
            _ => ScreenKind::Dashboard,
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenKind;

    #[test]
    fn slug_round_trips_for_every_kind() {
        for &kind in ScreenKind::all() {
            assert_eq!(ScreenKind::from_slug(kind.slug()), kind);
        }
    }

    #[test]
    fn unknown_slug_falls_back_to_dashboard() {
        assert_eq!(ScreenKind::from_slug("greenhouse"), ScreenKind::Dashboard);
        assert_eq!(ScreenKind::from_slug(""), ScreenKind::Dashboard);
        assert_eq!(ScreenKind::from_slug("   "), ScreenKind::Dashboard);
    }

    #[test]
    fn slug_parsing_ignores_case_and_whitespace() {
        assert_eq!(ScreenKind::from_slug(" Weather "), ScreenKind::Weather);
        assert_eq!(ScreenKind::from_slug("MAP"), ScreenKind::Map);
    }
}
