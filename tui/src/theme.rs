//! Color theme and glyphs for the Agriview TUI.
//!
//! Earth-toned palette by default with an optional high-contrast
//! override.

use ratatui::style::{Color, Modifier, Style};

use agriview_types::Severity;
use agriview_types::ui::UiOptions;

use agriview_engine::data::{Condition, Sky};

/// Default palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 26, 24);
    pub const BG_PANEL: Color = Color::Rgb(34, 38, 34);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(46, 52, 46);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(222, 220, 205);
    pub const TEXT_SECONDARY: Color = Color::Rgb(186, 184, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 122, 112);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(106, 168, 79); // field green
    pub const PRIMARY_DIM: Color = Color::Rgb(84, 128, 70);

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(110, 160, 214);
    pub const CYAN: Color = Color::Rgb(126, 184, 196); // wind / rain
    pub const GREEN: Color = Color::Rgb(146, 190, 104);
    pub const YELLOW: Color = Color::Rgb(226, 196, 120); // sun / watch
    pub const ORANGE: Color = Color::Rgb(232, 158, 90); // soil / warning
    pub const RED: Color = Color::Rgb(224, 96, 96);

    // === Semantic Aliases ===
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = ORANGE;
    pub const ERROR: Color = RED;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub blue: Color,
    pub cyan: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            blue: colors::BLUE,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Green,
            primary_dim: Color::Green,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            blue: Color::Blue,
            cyan: Color::Cyan,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
        }
    }

    /// Badge color for an alert severity.
    #[must_use]
    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Urgent => self.red,
            Severity::Important => self.warning,
            Severity::Watch => self.yellow,
            Severity::Info => self.blue,
        }
    }

    /// Status color for a parcel condition.
    #[must_use]
    pub fn condition(&self, condition: Condition) -> Color {
        match condition {
            Condition::Good => self.success,
            Condition::Watch => self.warning,
            Condition::Critical => self.error,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and markers.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub menu: &'static str,
    pub bell: &'static str,
    pub pin: &'static str,
    pub pin_pulse: &'static str,
    pub drop: &'static str,
    pub thermometer: &'static str,
    pub wind: &'static str,
    pub leaf: &'static str,
    pub sun: &'static str,
    pub cloud: &'static str,
    pub rain: &'static str,
    pub bullet: &'static str,
    pub selected: &'static str,
    pub back: &'static str,
    pub trend_up: &'static str,
    pub trend_down: &'static str,
    pub toggle_on: &'static str,
    pub toggle_off: &'static str,
    pub check: &'static str,
    pub warn: &'static str,
    pub meter_fill: &'static str,
    pub meter_empty: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            menu: "=",
            bell: "!",
            pin: "x",
            pin_pulse: "X",
            drop: "o",
            thermometer: "t",
            wind: "~",
            leaf: "v",
            sun: "*",
            cloud: "#",
            rain: ":",
            bullet: "*",
            selected: ">",
            back: "<-",
            trend_up: "^",
            trend_down: "v",
            toggle_on: "[x]",
            toggle_off: "[ ]",
            check: "OK",
            warn: "!!",
            meter_fill: "#",
            meter_empty: "-",
        }
    } else {
        Glyphs {
            menu: "☰",
            bell: "🔔",
            pin: "◉",
            pin_pulse: "◎",
            drop: "💧",
            thermometer: "🌡",
            wind: "🌬",
            leaf: "🌿",
            sun: "☀",
            cloud: "☁",
            rain: "🌧",
            bullet: "•",
            selected: "▸",
            back: "←",
            trend_up: "↑",
            trend_down: "↓",
            toggle_on: "◉ on ",
            toggle_off: "○ off",
            check: "✓",
            warn: "⚠",
            meter_fill: "█",
            meter_empty: "░",
        }
    }
}

impl Glyphs {
    /// Glyph for a forecast sky condition.
    #[must_use]
    pub fn sky(&self, sky: Sky) -> &'static str {
        match sky {
            Sky::Sun => self.sun,
            Sky::Cloud => self.cloud,
            Sky::Rain => self.rain,
        }
    }
}

/// Map pin marker; alternates frames unless reduced motion is set.
#[must_use]
pub fn pin_frame(tick: usize, options: UiOptions) -> &'static str {
    let glyphs = glyphs(options);
    if options.reduced_motion || tick % 2 == 0 {
        glyphs.pin
    } else {
        glyphs.pin_pulse
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn header(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn secondary(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn tab_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn selected_row(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use agriview_types::ui::UiOptions;

    use super::pin_frame;

    #[test]
    fn pin_alternates_frames() {
        let options = UiOptions::default();
        assert_ne!(pin_frame(0, options), pin_frame(1, options));
    }

    #[test]
    fn pin_is_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert_eq!(pin_frame(0, options), pin_frame(1, options));
        assert_eq!(pin_frame(0, options), pin_frame(99, options));
    }
}
