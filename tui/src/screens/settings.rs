//! Settings: notification toggles, sensor health, alert thresholds.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use agriview_engine::{App, SettingsState, data};

use crate::shared::{gauge_color, meter};
use crate::theme::{Glyphs, Palette, styles};

const TOGGLE_LABELS: [&str; SettingsState::ROWS] =
    ["Push notifications", "Email notifications", "SMS notifications"];

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SettingsState::ROWS as u16 + 3),
            Constraint::Length(data::SENSORS.len() as u16 + 2),
            Constraint::Min(2),
        ])
        .split(area);

    draw_notifications(frame, app.settings(), chunks[0], palette, glyphs);
    draw_sensors(frame, chunks[1], palette, glyphs);
    draw_thresholds(frame, chunks[2], palette, glyphs);
}

fn draw_notifications(
    frame: &mut Frame,
    settings: &SettingsState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let values = [
        settings.push_notifications(),
        settings.email_notifications(),
        settings.sms_notifications(),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (i, (label, enabled)) in TOGGLE_LABELS.iter().zip(values).enumerate() {
        let selected = i == settings.cursor();
        let pointer = if selected { glyphs.selected } else { " " };
        let label_style = if selected {
            styles::selected_row(palette)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        let toggle = if enabled { glyphs.toggle_on } else { glyphs.toggle_off };
        let toggle_style = if enabled {
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD)
        } else {
            styles::muted(palette)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{pointer} "), Style::default().fg(palette.primary)),
            Span::styled(format!("{label:<22}"), label_style),
            Span::styled(toggle, toggle_style),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Space", styles::key_highlight(palette)),
        Span::styled(" toggle  ", styles::key_hint(palette)),
        Span::styled("↑↓", styles::key_highlight(palette)),
        Span::styled(" select", styles::key_hint(palette)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(" Notifications ", styles::header(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_sensors(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for sensor in &data::SENSORS {
        let pct = u16::from(sensor.battery_pct);
        lines.push(Line::from(vec![
            Span::styled(format!("{:<22}", sensor.name), Style::default().fg(palette.text_primary)),
            Span::styled(format!("{:<10}", sensor.parcel), styles::muted(palette)),
            Span::styled(
                meter(pct, 10, glyphs),
                Style::default().fg(gauge_color(pct, palette)),
            ),
            Span::styled(format!(" {}%", sensor.battery_pct), styles::secondary(palette)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Line::from(Span::styled(" Sensors ", styles::secondary(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_thresholds(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (low, high) = data::HUMIDITY_THRESHOLDS;
    let lines = vec![Line::from(vec![
        Span::styled(format!("{} Soil humidity alerts  ", glyphs.drop), styles::secondary(palette)),
        Span::styled(
            format!("below {low} or above {high}"),
            Style::default().fg(palette.text_primary),
        ),
    ])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Line::from(Span::styled(" Alert thresholds ", styles::secondary(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
