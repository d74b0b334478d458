//! History & analysis: the soil-humidity trend over the selected
//! period and the intervention log.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
};

use agriview_engine::{App, HistoryPeriod, data};

use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(data::INTERVENTIONS.len() as u16 + 2),
        ])
        .split(area);

    draw_periods(frame, app.history_period(), chunks[0], palette, glyphs);
    draw_trend(frame, chunks[1], palette);
    draw_interventions(frame, chunks[2], palette, glyphs);
}

fn draw_periods(
    frame: &mut Frame,
    active: HistoryPeriod,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, period) in HistoryPeriod::all().iter().enumerate() {
        let style = if *period == active {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, period.label()), style));
        spans.push(Span::raw("   "));
    }

    let trend = &data::MOISTURE_TREND;
    let average = trend.iter().map(|p| p.value).sum::<f64>() / trend.len() as f64;
    let delta = trend[trend.len() - 1].value - trend[0].value;
    let (arrow, color) = if delta >= 0.0 {
        (glyphs.trend_up, palette.success)
    } else {
        (glyphs.trend_down, palette.warning)
    };
    let headline = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Average soil humidity {average:.0}%"),
            styles::header(palette),
        ),
        Span::styled(
            format!("  {arrow} {delta:+.0}% over the period"),
            Style::default().fg(color),
        ),
    ]);

    frame.render_widget(Paragraph::new(vec![Line::from(spans), headline]), area);
}

fn draw_trend(frame: &mut Frame, area: Rect, palette: &Palette) {
    let points: Vec<(f64, f64)> = data::MOISTURE_TREND
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("soil humidity")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette.primary))
            .data(&points),
    ];

    let first = data::MOISTURE_TREND[0].date;
    let last_point = data::MOISTURE_TREND[data::MOISTURE_TREND.len() - 1];
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.text_muted))
                .title(Line::from(Span::styled(
                    " Soil humidity trend ",
                    styles::header(palette),
                ))),
        )
        .x_axis(
            Axis::default()
                .style(styles::muted(palette))
                .bounds([0.0, (data::MOISTURE_TREND.len() - 1) as f64])
                .labels([first, last_point.date]),
        )
        .y_axis(
            Axis::default()
                .style(styles::muted(palette))
                .bounds([30.0, 55.0])
                .labels(["30%", "55%"]),
        );

    frame.render_widget(chart, area);
}

fn draw_interventions(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();
    for op in &data::INTERVENTIONS {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), Style::default().fg(palette.primary)),
            Span::styled(op.kind, Style::default().fg(palette.text_primary)),
            Span::styled(format!(" {}", op.detail), styles::secondary(palette)),
            Span::styled(format!("  {}", op.date), styles::muted(palette)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Line::from(Span::styled(" Interventions ", styles::secondary(palette))))
        .title_bottom(
            Line::from(vec![
                Span::styled("Tab/1-4", styles::key_highlight(palette)),
                Span::styled(" period ", styles::key_hint(palette)),
            ])
            .right_aligned(),
        );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
