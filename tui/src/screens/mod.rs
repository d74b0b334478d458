//! One rendering module per screen.

mod alerts;
mod dashboard;
mod help;
mod history;
mod map;
mod parcel_detail;
mod profile;
mod settings;
mod weather;

use ratatui::{Frame, layout::Rect};

use agriview_engine::{App, ScreenKind};

use crate::theme::{Glyphs, Palette};

/// Render the body of whichever screen is active.
pub(crate) fn draw_active(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    match app.screen() {
        ScreenKind::Dashboard => dashboard::draw(frame, app, area, palette, glyphs),
        ScreenKind::Map => map::draw(frame, app, area, palette, glyphs),
        ScreenKind::Alerts => alerts::draw(frame, app, area, palette, glyphs),
        ScreenKind::ParcelDetail => parcel_detail::draw(frame, app, area, palette, glyphs),
        ScreenKind::Settings => settings::draw(frame, app, area, palette, glyphs),
        ScreenKind::Profile => profile::draw(frame, app, area, palette, glyphs),
        ScreenKind::Help => help::draw(frame, area, palette, glyphs),
        ScreenKind::History => history::draw(frame, app, area, palette, glyphs),
        ScreenKind::Weather => weather::draw(frame, area, palette, glyphs),
    }
}
