//! Field map: a schematic plot of the selected parcel plus its
//! irrigation status.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use agriview_engine::{App, data};

use crate::shared::{gauge_color, kv_line, meter};
use crate::theme::{Glyphs, Palette, pin_frame, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let parcel = data::parcel_or_default(app.selected_parcel());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),     // plot
            Constraint::Length(6),  // parcel summary
            Constraint::Length(8),  // irrigation
        ])
        .split(area);

    draw_plot(frame, app, parcel, chunks[0], palette, glyphs);
    draw_summary(frame, parcel, chunks[1], palette, glyphs);
    draw_irrigation(frame, parcel, chunks[2], palette, glyphs);
}

fn draw_plot(
    frame: &mut Frame,
    app: &App,
    parcel: &data::Parcel,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let pin = pin_frame(app.tick_count(), app.ui_options());
    let condition_color = palette.condition(parcel.condition);

    // Schematic field with the active parcel pinned in its row.
    let mut lines: Vec<Line> = vec![Line::from("")];
    for fixture in &data::PARCELS {
        let active = fixture.id == parcel.id;
        let marker = if active { pin } else { glyphs.bullet };
        let marker_style = if active {
            Style::default()
                .fg(condition_color)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::muted(palette)
        };
        let label_style = if active {
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::muted(palette)
        };
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("{marker} "), marker_style),
            Span::styled(format!("{:<10}", fixture.name), label_style),
            Span::styled(format!("{:<10}", fixture.crop), styles::muted(palette)),
            Span::styled(fixture.surface, styles::muted(palette)),
        ]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .title(Line::from(Span::styled(
            format!(" {} Field map ", glyphs.pin),
            styles::header(palette),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_summary(
    frame: &mut Frame,
    parcel: &data::Parcel,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = area.width.saturating_sub(4) as usize;
    let value = Style::default().fg(palette.text_primary);
    let lines = vec![
        kv_line("Crop", parcel.crop.to_string(), width, styles::muted(palette), value),
        kv_line(
            "Condition",
            parcel.condition.label().to_string(),
            width,
            styles::muted(palette),
            Style::default()
                .fg(palette.condition(parcel.condition))
                .add_modifier(Modifier::BOLD),
        ),
        kv_line(
            "Soil humidity",
            format!("{} {}", glyphs.drop, parcel.soil_humidity),
            width,
            styles::muted(palette),
            Style::default().fg(palette.blue),
        ),
        kv_line(
            "Wind",
            format!("{} {}", glyphs.wind, parcel.irrigation.wind),
            width,
            styles::muted(palette),
            Style::default().fg(palette.cyan),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} ({}) ", parcel.name, parcel.surface),
            styles::header(palette),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_irrigation(
    frame: &mut Frame,
    parcel: &data::Parcel,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let irrigation = &parcel.irrigation;
    let width = area.width.saturating_sub(4) as usize;
    let bar_width = width.saturating_sub(24).clamp(8, 30);
    let value = Style::default().fg(palette.text_primary);

    let lines = vec![
        kv_line("System", irrigation.system.to_string(), width, styles::muted(palette), value),
        kv_line("Last cycle", irrigation.last_cycle.to_string(), width, styles::muted(palette), value),
        kv_line(
            "Next cycle",
            irrigation.next_cycle.to_string(),
            width,
            styles::muted(palette),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled("Water used (7 days)  ", styles::muted(palette)),
            Span::styled(
                meter(irrigation.water_used_pct, bar_width, glyphs),
                Style::default().fg(gauge_color(irrigation.water_used_pct, palette)),
            ),
            Span::styled(format!(" {}", irrigation.water_used), styles::secondary(palette)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.blue))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} Irrigation ", glyphs.drop),
            Style::default()
                .fg(palette.blue)
                .add_modifier(Modifier::BOLD),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
