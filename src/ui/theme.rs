//! Color themes for the UI.

use crate::app::Theme;
use crate::plot::OverlayColor;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Trajectory line color.
    pub series: Color,
    /// Blue overlay color.
    pub blue: Color,
    /// Red overlay color.
    pub red: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                series: Color::Rgb(142, 192, 124),
                blue: Color::Rgb(131, 165, 152),
                red: Color::Rgb(251, 73, 52),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                series: Color::Rgb(121, 116, 14),
                blue: Color::Rgb(7, 102, 120),
                red: Color::Rgb(157, 0, 6),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Resolve an overlay color against this palette.
    pub fn overlay(&self, color: OverlayColor) -> Color {
        match color {
            OverlayColor::Blue => self.blue,
            OverlayColor::Red => self.red,
        }
    }
}
