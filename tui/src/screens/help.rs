//! Help: the key bindings reference.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use crate::theme::{Glyphs, Palette, styles};

const GLOBAL_KEYS: [(&str, &str); 7] = [
    ("m", "open the navigation menu"),
    ("1-4", "dashboard / map / alerts / weather"),
    ("?", "this help screen"),
    ("Esc", "back to the dashboard"),
    ("q", "quit"),
    ("↑↓ / jk", "move within a screen"),
    ("Enter", "activate the highlighted item"),
];

const SCREEN_KEYS: [(&str, &str); 5] = [
    ("Dashboard: Enter", "show the highlighted parcel on the map"),
    ("Dashboard: p", "open the highlighted parcel's detail"),
    ("Alerts: Tab / ← →", "cycle the status tabs"),
    ("History: Tab / 1-4", "change the analysis period"),
    ("Settings: Space", "toggle the selected notification"),
];

pub(crate) fn draw(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Global", styles::header(palette))),
        Line::from(""),
    ];
    for (key, action) in GLOBAL_KEYS {
        lines.push(key_row(key, action, palette));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Per screen", styles::header(palette))));
    lines.push(Line::from(""));
    for (key, action) in SCREEN_KEYS {
        lines.push(key_row(key, action, palette));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .padding(Padding::uniform(1))
        .title(Line::from(Span::styled(
            format!(" {} Help ", glyphs.leaf),
            styles::header(palette),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn key_row<'a>(key: &'a str, action: &'a str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<20}"), styles::key_highlight(palette)),
        Span::styled(action, styles::secondary(palette)),
    ])
}
