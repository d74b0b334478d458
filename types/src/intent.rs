use crate::{ParcelId, ScreenKind};

/// A navigation request raised by a screen or the overlay menu.
///
/// Intents are total: every variant has a defined result and none can
/// fail. They are dispatched synchronously by the view controller in
/// response to a single input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Activate a screen, leaving the parcel selection untouched.
    GoTo(ScreenKind),
    /// Select a parcel and show it on the map.
    GoToMapFor(ParcelId),
    /// Select a parcel and show its detail screen.
    GoToDetailFor(ParcelId),
    OpenMenu,
    CloseMenu,
}
