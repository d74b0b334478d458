//! TUI rendering for Agriview using ratatui.

mod input;
mod menu;
mod screens;
mod shared;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, pin_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use agriview_engine::{App, ScreenKind, data};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // active screen
            Constraint::Length(1), // bottom navigation
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    screens::draw_active(frame, app, chunks[1], &palette, &glyphs);
    draw_bottom_nav(frame, app, chunks[2], &palette);

    if app.menu_open() {
        menu::draw(frame, app, &palette, &glyphs);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let active_alerts = data::active_alert_count();
    let left = Line::from(vec![
        Span::styled(format!("{} ", glyphs.menu), Style::default().fg(palette.primary)),
        Span::styled(app.screen().title(), styles::header(palette)),
    ]);
    let right = Line::from(vec![
        Span::styled(format!("{} ", glyphs.bell), Style::default().fg(palette.error)),
        Span::styled(
            format!("{active_alerts}"),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ])
    .right_aligned();

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(Paragraph::new(right), area);
}

const BOTTOM_NAV: [(char, ScreenKind); 4] = [
    ('1', ScreenKind::Dashboard),
    ('2', ScreenKind::Map),
    ('3', ScreenKind::Alerts),
    ('4', ScreenKind::Weather),
];

fn draw_bottom_nav(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans: Vec<Span> = Vec::new();
    for (digit, kind) in BOTTOM_NAV {
        let style = if app.screen() == kind {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(format!("{digit} "), styles::key_highlight(palette)));
        spans.push(Span::styled(kind.title(), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("m", styles::key_highlight(palette)));
    spans.push(Span::styled(" menu  ", styles::key_hint(palette)));
    spans.push(Span::styled("?", styles::key_highlight(palette)));
    spans.push(Span::styled(" help  ", styles::key_hint(palette)));
    spans.push(Span::styled("q", styles::key_highlight(palette)));
    spans.push(Span::styled(" quit", styles::key_hint(palette)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use agriview_engine::{App, ScreenKind};
    use agriview_types::ParcelId;

    use super::draw;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(90, 36);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn dashboard_renders_farm_and_parcels() {
        let mut app = App::new();
        let screen = render(&mut app);
        assert!(screen.contains("Martin Farm"));
        assert!(screen.contains("Urgent actions"));
        assert!(screen.contains("Parcel A"));
        assert!(screen.contains("Tomatoes"));
    }

    #[test]
    fn every_screen_renders_its_title() {
        for kind in ScreenKind::all() {
            let mut app = App::new();
            app.navigate_to(*kind);
            let screen = render(&mut app);
            assert!(
                screen.contains(kind.title()),
                "missing title for {kind:?}"
            );
        }
    }

    #[test]
    fn map_shows_the_selected_parcel() {
        let mut app = App::new();
        app.navigate_to_map(ParcelId::new("C"));
        let screen = render(&mut app);
        assert!(screen.contains("Parcel C"));
        assert!(screen.contains("Localized irrigation"));
    }

    #[test]
    fn map_falls_back_to_parcel_a_for_unknown_ids() {
        let mut app = App::new();
        app.navigate_to_map(ParcelId::new("Z"));
        let screen = render(&mut app);
        assert!(screen.contains("Sprinkler irrigation"));
    }

    #[test]
    fn menu_overlay_lists_destinations() {
        let mut app = App::new();
        app.open_menu();
        let screen = render(&mut app);
        assert!(screen.contains("Menu"));
        assert!(screen.contains("Field Map"));
        assert!(screen.contains("Alert Center"));
        assert!(screen.contains("Help"));
    }

    #[test]
    fn dismissing_the_recommendation_hides_it() {
        let mut app = App::new();
        app.navigate_to_parcel_detail(ParcelId::new("B"));
        assert!(render(&mut app).contains("Recommended irrigation"));
        app.parcel_detail_mut().dismiss_recommendation();
        assert!(!render(&mut app).contains("Recommended irrigation"));
    }

    #[test]
    fn alerts_screen_shows_tab_counts() {
        let mut app = App::new();
        app.navigate_to(ScreenKind::Alerts);
        let screen = render(&mut app);
        assert!(screen.contains("All (7)"));
        assert!(screen.contains("Active (6)"));
        assert!(screen.contains("Resolved (1)"));
    }

    #[test]
    fn ascii_mode_renders_without_unicode_icons() {
        let config = agriview_engine::AgriConfig {
            app: Some(agriview_engine::AppConfig {
                ascii_only: true,
                ..Default::default()
            }),
        };
        let mut app = App::from_config(Some(&config));
        let screen = render(&mut app);
        assert!(!screen.contains('☰'));
        assert!(!screen.contains('💧'));
    }
}
