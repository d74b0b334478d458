//! Alert center with All / Active / Resolved tabs.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use agriview_engine::{AlertsTab, App, data};
use agriview_types::{AlertStatus, Severity};

use crate::shared::truncate_with_ellipsis;
use crate::theme::{Glyphs, Palette, styles};

fn tab_count(tab: AlertsTab) -> usize {
    match tab {
        AlertsTab::All => data::ALERTS.len(),
        AlertsTab::Active => data::active_alert_count(),
        AlertsTab::Resolved => data::resolved_alert_count(),
    }
}

fn tab_matches(tab: AlertsTab, status: AlertStatus) -> bool {
    match tab {
        AlertsTab::All => true,
        AlertsTab::Active => status == AlertStatus::Active,
        AlertsTab::Resolved => status == AlertStatus::Resolved,
    }
}

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    draw_tabs(frame, app.alerts_tab(), chunks[0], palette);
    draw_list(frame, app.alerts_tab(), chunks[1], palette, glyphs);
}

fn draw_tabs(frame: &mut Frame, active: AlertsTab, area: Rect, palette: &Palette) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for tab in AlertsTab::all() {
        let style = if *tab == active {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(
            format!("{} ({})", tab.label(), tab_count(*tab)),
            style,
        ));
        spans.push(Span::raw("   "));
    }

    let mut severity_spans: Vec<Span> = vec![Span::raw(" ")];
    for severity in Severity::all() {
        let count = data::ALERTS
            .iter()
            .filter(|a| a.severity == *severity)
            .count();
        severity_spans.push(Span::styled(
            format!("{} {}", count, severity.label()),
            Style::default().fg(palette.severity(*severity)),
        ));
        severity_spans.push(Span::raw("   "));
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(spans), Line::from(severity_spans)]),
        area,
    );
}

fn draw_list(frame: &mut Frame, tab: AlertsTab, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut lines: Vec<Line> = Vec::new();

    let visible: Vec<&data::Alert> = data::ALERTS
        .iter()
        .filter(|alert| tab_matches(tab, alert.status))
        .collect();

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No alerts in this category.",
            styles::muted(palette),
        )));
    }

    for alert in visible {
        let color = palette.severity(alert.severity);
        let status_span = match alert.status {
            AlertStatus::Active => Span::styled(
                format!(" [{}]", alert.severity.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            AlertStatus::Resolved => Span::styled(
                format!(" {} resolved", glyphs.check),
                Style::default().fg(palette.success),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bell), Style::default().fg(color)),
            Span::styled(
                alert.title,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            status_span,
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} {} {} {} {}",
                alert.kind, glyphs.bullet, alert.parcel, glyphs.bullet, alert.timestamp
            ),
            styles::muted(palette),
        )));
        let description_width = area.width.saturating_sub(6) as usize;
        lines.push(Line::from(Span::styled(
            format!("   {}", truncate_with_ellipsis(alert.description, description_width)),
            styles::secondary(palette),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(" Alerts ", styles::header(palette))))
        .title_bottom(
            Line::from(vec![
                Span::styled("Tab/←→", styles::key_highlight(palette)),
                Span::styled(" switch tab ", styles::key_hint(palette)),
            ])
            .right_aligned(),
        );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
