//! Farm weather: current conditions, hourly strip, 7-day outlook, and
//! agricultural advisories.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use agriview_engine::data;

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // current conditions
            Constraint::Length(4),  // hourly
            Constraint::Min(5),     // daily
            Constraint::Length(data::WEATHER_ADVISORIES.len() as u16 + 2),
        ])
        .split(area);

    draw_current(frame, chunks[0], palette, glyphs);
    draw_hourly(frame, chunks[1], palette, glyphs);
    draw_daily(frame, chunks[2], palette, glyphs);
    draw_advisories(frame, chunks[3], palette, glyphs);
}

fn draw_current(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let now = &data::CURRENT_WEATHER;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} {}°C", glyphs.sky(now.sky), now.temp_c),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  feels like {}°C", now.feels_like_c),
                styles::muted(palette),
            ),
            Span::styled(
                format!("  {}", now.condition),
                styles::secondary(palette),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} {}%", glyphs.drop, now.humidity_pct),
                Style::default().fg(palette.blue),
            ),
            Span::styled(
                format!("  {} {} km/h", glyphs.wind, now.wind_kmh),
                Style::default().fg(palette.cyan),
            ),
            Span::styled(
                format!("  {} hPa  vis {} km  UV {}", now.pressure_hpa, now.visibility_km, now.uv_index),
                styles::muted(palette),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} sunrise {}   sunset {}", glyphs.sun, now.sunrise, now.sunset),
            styles::muted(palette),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.blue))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(" Current conditions ", styles::header(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_hourly(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut times: Vec<Span> = vec![Span::raw(" ")];
    let mut values: Vec<Span> = vec![Span::raw(" ")];
    for hour in &data::HOURLY_FORECAST {
        times.push(Span::styled(format!("{:<9}", hour.time), styles::muted(palette)));
        values.push(Span::styled(
            format!("{} {:<2}°", glyphs.sky(hour.sky), hour.temp_c),
            Style::default().fg(palette.text_primary),
        ));
        values.push(Span::styled(
            format!(" {:>2}% ", hour.precipitation_pct),
            Style::default().fg(palette.blue),
        ));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Line::from(Span::styled(" Next hours ", styles::secondary(palette))));

    frame.render_widget(
        Paragraph::new(vec![Line::from(times), Line::from(values)]).block(block),
        area,
    );
}

fn draw_daily(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for day in &data::DAILY_FORECAST {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", day.day), styles::secondary(palette)),
            Span::styled(format!("{} ", glyphs.sky(day.sky)), Style::default().fg(palette.yellow)),
            Span::styled(
                format!("{:>3}° / {:<3}°", day.max_c, day.min_c),
                Style::default().fg(palette.text_primary),
            ),
            Span::styled(format!("  {:>3}%", day.precipitation_pct), Style::default().fg(palette.blue)),
            Span::styled(format!("  {}", day.description), styles::muted(palette)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(" 7-day outlook ", styles::header(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_advisories(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for advisory in &data::WEATHER_ADVISORIES {
        let color = palette.severity(advisory.severity);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.warn), Style::default().fg(color)),
            Span::styled(advisory.message, Style::default().fg(palette.text_secondary)),
            Span::styled(
                format!("  {} {}", glyphs.selected, advisory.action),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.warning))
        .title(Line::from(Span::styled(
            " Advisories ",
            Style::default().fg(palette.warning),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
