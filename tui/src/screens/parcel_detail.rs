//! Parcel detail: live probe readings, the soil-moisture depth chart,
//! the irrigation recommendation, and the operations log.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Padding, Paragraph},
};

use agriview_engine::{App, data};

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let parcel = data::parcel_or_default(app.selected_parcel());
    let recommendation_visible = app.parcel_detail().recommendation_visible();

    let mut constraints = vec![
        Constraint::Length(4), // live readings
        Constraint::Min(8),    // moisture chart
    ];
    if recommendation_visible {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Length(data::OPERATIONS_LOG.len() as u16 + 2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_live(frame, parcel, chunks[0], palette, glyphs);
    draw_moisture_chart(frame, chunks[1], palette);
    if recommendation_visible {
        draw_recommendation(frame, chunks[2], palette, glyphs);
    }
    let log_area = if recommendation_visible { chunks[3] } else { chunks[2] };
    draw_operations(frame, log_area, palette, glyphs);
}

fn draw_live(
    frame: &mut Frame,
    parcel: &data::Parcel,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let live = &data::PARCEL_LIVE;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} Soil humidity {}", glyphs.drop, live.soil_humidity),
                Style::default().fg(palette.blue).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  30cm {}  50cm {}  80cm {}",
                    live.humidity_30cm, live.humidity_50cm, live.humidity_80cm
                ),
                styles::muted(palette),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} Soil temp {}", glyphs.thermometer, live.soil_temp),
                Style::default().fg(palette.warning),
            ),
            Span::styled(
                format!(" {} {}", glyphs.trend_up, live.soil_temp_trend),
                styles::muted(palette),
            ),
            Span::styled(
                format!("  {} CO2 {}", glyphs.leaf, live.co2),
                Style::default().fg(palette.green),
            ),
            Span::styled(format!(" ({})", live.co2_level), styles::muted(palette)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} - {} ", parcel.name, parcel.crop),
            styles::header(palette),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_moisture_chart(frame: &mut Frame, area: Rect, palette: &Palette) {
    let series = |pick: fn(&data::SoilMoistureDay) -> f64| -> Vec<(f64, f64)> {
        data::SOIL_MOISTURE_WEEK
            .iter()
            .enumerate()
            .map(|(i, day)| (i as f64, pick(day)))
            .collect()
    };
    let d30 = series(|day| day.depth_30cm);
    let d50 = series(|day| day.depth_50cm);
    let d80 = series(|day| day.depth_80cm);

    let datasets = vec![
        Dataset::default()
            .name("30cm")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.blue))
            .data(&d30),
        Dataset::default()
            .name("50cm")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.cyan))
            .data(&d50),
        Dataset::default()
            .name("80cm")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.primary))
            .data(&d80),
    ];

    let last = (data::SOIL_MOISTURE_WEEK.len() - 1) as f64;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.text_muted))
                .title(Line::from(Span::styled(
                    " Soil moisture by depth (7 days) ",
                    styles::header(palette),
                ))),
        )
        .x_axis(
            Axis::default()
                .style(styles::muted(palette))
                .bounds([0.0, last])
                .labels(["day 1", "day 7"]),
        )
        .y_axis(
            Axis::default()
                .style(styles::muted(palette))
                .bounds([20.0, 60.0])
                .labels(["20%", "40%", "60%"]),
        );

    frame.render_widget(chart, area);
}

fn draw_recommendation(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.drop), Style::default().fg(palette.blue)),
            Span::styled(
                data::RECOMMENDATION.title,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(data::RECOMMENDATION.detail, styles::secondary(palette))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.blue))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            " Recommendation ",
            Style::default().fg(palette.blue).add_modifier(Modifier::BOLD),
        )))
        .title_bottom(
            Line::from(vec![
                Span::styled("x", styles::key_highlight(palette)),
                Span::styled(" dismiss ", styles::key_hint(palette)),
            ])
            .right_aligned(),
        );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_operations(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for op in &data::OPERATIONS_LOG {
        let mut spans = vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.primary)),
            Span::styled(op.kind, Style::default().fg(palette.text_primary)),
        ];
        if !op.detail.is_empty() {
            spans.push(Span::styled(format!(" ({})", op.detail), styles::secondary(palette)));
        }
        spans.push(Span::styled(format!("  {}", op.date), styles::muted(palette)));
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Line::from(Span::styled(" Recent operations ", styles::secondary(palette))));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
