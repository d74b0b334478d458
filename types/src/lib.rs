//! Core domain types for Agriview.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod intent;
mod parcel;
mod screen;
mod severity;
pub mod ui;

pub use intent::NavigationIntent;
pub use parcel::ParcelId;
pub use screen::ScreenKind;
pub use severity::{AlertStatus, Severity};
