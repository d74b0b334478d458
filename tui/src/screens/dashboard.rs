//! Dashboard: urgent actions and the parcel overview cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use agriview_engine::{App, data};

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                                       // greeting
            Constraint::Length(data::URGENT_ACTIONS.len() as u16 + 3),   // urgent actions
            Constraint::Min(1),                                          // parcel cards
        ])
        .split(area);

    draw_greeting(frame, chunks[0], palette, glyphs);
    draw_urgent_actions(frame, chunks[1], palette, glyphs);
    draw_parcels(frame, app, chunks[2], palette, glyphs);
}

fn draw_greeting(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let greeting = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Hello, ", Style::default().fg(palette.text_secondary)),
            Span::styled(data::FARM.name, styles::header(palette)),
        ]),
        Line::from(Span::styled(
            format!(
                "{} parcels  {} {} ha  {} {} active alerts",
                data::PARCELS.len(),
                glyphs.bullet,
                data::total_surface_ha(),
                glyphs.bullet,
                data::active_alert_count()
            ),
            styles::muted(palette),
        )),
    ]);
    frame.render_widget(greeting, area);
}

fn draw_urgent_actions(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for action in &data::URGENT_ACTIONS {
        let color = palette.severity(action.severity);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.bullet),
                Style::default().fg(color),
            ),
            Span::styled(
                action.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} {} {}", action.parcel, glyphs.bullet, action.description),
                styles::muted(palette),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.warning))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} Urgent actions ", glyphs.warn),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_parcels(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let cursor = app.dashboard().cursor();

    let mut lines: Vec<Line> = Vec::new();
    for (i, parcel) in data::PARCELS.iter().enumerate() {
        let highlighted = i == cursor;
        let pointer = if highlighted { glyphs.selected } else { " " };
        let name_style = if highlighted {
            styles::selected_row(palette)
        } else {
            Style::default().fg(palette.text_primary)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{pointer} "), Style::default().fg(palette.primary)),
            Span::styled(format!("{:<10}", parcel.name), name_style),
            Span::styled(
                format!(" {:<10} {:>6}  ", parcel.crop, parcel.surface),
                styles::secondary(palette),
            ),
            Span::styled(
                parcel.condition.label(),
                Style::default()
                    .fg(palette.condition(parcel.condition))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "     {} {}   {} {}",
                glyphs.drop, parcel.soil_humidity, glyphs.thermometer, parcel.temperature
            ),
            styles::muted(palette),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" view on map  ", styles::key_hint(palette)),
        Span::styled("p", styles::key_highlight(palette)),
        Span::styled(" parcel detail  ", styles::key_hint(palette)),
        Span::styled("a", styles::key_highlight(palette)),
        Span::styled(" alerts", styles::key_hint(palette)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            " My parcels ",
            styles::header(palette),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
