//! Core engine for Agriview - navigation state machine and sample data.
//!
//! This crate contains the [`App`] view controller without TUI
//! dependencies:
//!
//! - **Navigation state**: which screen is active, which parcel is
//!   selected, whether the overlay menu is open
//! - **Per-screen view state**: cursors, tabs, and toggles local to a
//!   screen but owned here so rendering stays a pure function of state
//! - **Sample data**: the hardcoded parcels, alerts, weather, and
//!   history fixtures every screen displays
//! - **Configuration**: the optional `~/.agriview/config.toml`
//!
//! The TUI layer (`agriview-tui`) reads state from `App` and forwards
//! input back to it. No rendering logic lives in this crate.

mod app;
mod config;
pub mod data;
mod nav;
mod ui;

pub use app::App;
pub use config::{AgriConfig, AppConfig, ConfigError};
pub use nav::NavigationState;
pub use ui::{
    AlertsTab, DashboardState, HistoryPeriod, MenuState, ParcelDetailState, SettingsState,
};

// Re-export the domain types the TUI consumes alongside the engine.
pub use agriview_types::{
    AlertStatus, NavigationIntent, ParcelId, ScreenKind, Severity, ui::UiOptions,
};

#[cfg(test)]
mod tests;
