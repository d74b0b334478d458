//! Farm profile.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use agriview_engine::{App, data};

use crate::shared::kv_line;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let width = area.width.saturating_sub(4) as usize;
    let value = Style::default().fg(palette.text_primary);

    let lines = vec![
        kv_line("Farm", data::FARM.name.to_string(), width, styles::muted(palette), value),
        kv_line("Role", data::FARM.role.to_string(), width, styles::muted(palette), value),
        kv_line("Region", data::FARM.region.to_string(), width, styles::muted(palette), value),
        kv_line(
            "Parcels",
            format!("{}", data::PARCELS.len()),
            width,
            styles::muted(palette),
            value,
        ),
        kv_line(
            "Selected parcel",
            app.selected_parcel().to_string(),
            width,
            styles::muted(palette),
            Style::default().fg(palette.primary),
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} All sample data, no account is connected.", glyphs.leaf),
            styles::muted(palette),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .padding(Padding::uniform(1))
        .title(Line::from(Span::styled(" Profile ", styles::header(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
