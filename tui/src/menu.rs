//! The slide-in navigation menu, drawn as an overlay on the left edge.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use agriview_engine::{App, MenuState, ScreenKind, data};

use crate::theme::{Glyphs, Palette, styles};

const MENU_WIDTH: u16 = 30;

pub(crate) fn draw(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let panel = Rect {
        x: area.x,
        y: area.y,
        width: MENU_WIDTH.min(area.width),
        height: area.height,
    };

    // Dim the active screen behind the panel.
    frame.render_widget(
        Block::default().style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
    frame.render_widget(Clear, panel);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.leaf), Style::default().fg(palette.primary)),
            Span::styled(data::FARM.name, styles::brand(palette)),
        ]),
        Line::from(Span::styled(
            format!("{} {}", data::FARM.role, data::FARM.region),
            styles::muted(palette),
        )),
        Line::from(""),
    ];

    let cursor = app.menu().cursor();
    for (i, destination) in MenuState::destinations().iter().enumerate() {
        let selected = i == cursor;
        let active = *destination == app.screen();
        let pointer = if selected { glyphs.selected } else { " " };
        let mut style = if selected {
            styles::selected_row(palette)
        } else if active {
            Style::default().fg(palette.primary)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        if active {
            style = style.add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::styled(format!("{pointer} "), Style::default().fg(palette.primary)),
            Span::styled(format!("{:<16}", destination.title()), style),
        ];
        if *destination == ScreenKind::Alerts {
            spans.push(Span::styled(
                format!("{} {}", glyphs.bell, data::active_alert_count()),
                Style::default().fg(palette.error),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" go  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" close", styles::key_hint(palette)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1))
        .title(Line::from(Span::styled(
            format!(" {} Menu ", glyphs.menu),
            styles::header(palette),
        )));

    frame.render_widget(Paragraph::new(lines).block(block), panel);
}
