//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Keys understood by the chart screen.
pub const KEYMAP_TEXT: &str = "q/Esc:close | r:reload | T:theme";

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_TEXT).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
