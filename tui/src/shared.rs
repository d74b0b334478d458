//! Small layout and formatting helpers shared by the screens.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{Glyphs, Palette};

pub(crate) fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    let trimmed = raw.trim();
    if trimmed.chars().count() <= max {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max - 3).collect();
        format!("{head}...")
    }
}

/// A label on the left and a value flushed right, padded to `width` columns.
pub(crate) fn kv_line<'a>(
    label: &'a str,
    value: String,
    width: usize,
    label_style: Style,
    value_style: Style,
) -> Line<'a> {
    let used = label.width() + value.width();
    let filler = width.saturating_sub(used);
    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" ".repeat(filler)),
        Span::styled(value, value_style),
    ])
}

/// Horizontal percentage meter, `width` cells wide.
pub(crate) fn meter(pct: u16, width: usize, glyphs: &Glyphs) -> String {
    let pct = pct.min(100) as usize;
    let filled = (pct * width).div_euclid(100);
    let mut bar = glyphs.meter_fill.repeat(filled);
    bar.push_str(&glyphs.meter_empty.repeat(width - filled));
    bar
}

/// Color for a battery or water gauge by fill level.
pub(crate) fn gauge_color(pct: u16, palette: &Palette) -> Color {
    match pct {
        0..=25 => palette.error,
        26..=60 => palette.warning,
        _ => palette.success,
    }
}

#[cfg(test)]
mod tests {
    use agriview_types::ui::UiOptions;

    use crate::theme::{Palette, glyphs};

    use super::{gauge_color, meter, truncate_with_ellipsis};

    #[test]
    fn truncation_respects_limit() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a rather long label", 10), "a rathe...");
    }

    #[test]
    fn meter_fills_proportionally() {
        let ascii = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        assert_eq!(meter(0, 10, &ascii), "----------");
        assert_eq!(meter(50, 10, &ascii), "#####-----");
        assert_eq!(meter(100, 10, &ascii), "##########");
        assert_eq!(meter(250, 10, &ascii), "##########");
    }

    #[test]
    fn gauge_color_bands() {
        let palette = Palette::standard();
        assert_eq!(gauge_color(10, &palette), palette.error);
        assert_eq!(gauge_color(40, &palette), palette.warning);
        assert_eq!(gauge_color(92, &palette), palette.success);
    }
}
