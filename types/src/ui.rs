//! UI presentation options shared between the engine and the TUI layer.

use serde::{Deserialize, Serialize};

/// Rendering preferences threaded to the theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and gauges.
    pub ascii_only: bool,
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
    /// Render static glyphs instead of cycling spinner frames.
    pub reduced_motion: bool,
}
