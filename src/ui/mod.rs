//! User interface rendering.

mod chart_view;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use chart_view::{draw_chart, fit_aspect};
pub use keymap_bar::{draw_keymap, KEYMAP_TEXT};
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Chart, then status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), chunks[0]);
    draw_chart(f, chunks[0], &app.figure, &app.layout, &colors);
    draw_status(f, chunks[1], &app.status, app.error_message.as_deref(), &colors);
    draw_keymap(f, chunks[2], &colors);
}
