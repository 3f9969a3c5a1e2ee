//! Chart rendering for a [`Figure`].

use super::ThemeColors;
use crate::plot::Figure;
use crate::util::{format_axis_label, ChartLayoutConfig};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// Draw the figure into `area`, keeping the figure's aspect ratio.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    figure: &Figure,
    layout: &ChartLayoutConfig,
    colors: &ThemeColors,
) {
    let area = fit_aspect(area, figure.size.aspect_ratio(), layout.cell_aspect);
    let bounds = figure.view_bounds(layout.margin_factor);

    // Outlines and points are owned here; datasets borrow them for the draw call.
    let outlines: Vec<Vec<(f64, f64)>> = figure
        .circles
        .iter()
        .map(|c| c.outline(layout.circle_segments))
        .collect();
    let series_points: Vec<Vec<(f64, f64)>> = figure
        .series
        .iter()
        .map(|s| s.plottable_points())
        .collect();

    let mut datasets: Vec<Dataset<'_>> = figure
        .circles
        .iter()
        .zip(&outlines)
        .map(|(circle, outline)| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.overlay(circle.color)))
                .data(outline)
        })
        .collect();

    // Series last so the trajectory is painted over the circles.
    datasets.extend(figure.series.iter().zip(&series_points).map(|(series, points)| {
        Dataset::default()
            .name(series.label.as_str())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.series))
            .data(points)
    }));

    let x_axis = Axis::default()
        .title(figure.x_label.as_str())
        .style(Style::default().fg(colors.text))
        .bounds(bounds.x)
        .labels(axis_labels(bounds.x));

    let y_axis = Axis::default()
        .title(figure.y_label.as_str())
        .style(Style::default().fg(colors.text))
        .bounds(bounds.y)
        .labels(axis_labels(bounds.y));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", figure.title))
                .title_alignment(Alignment::Center)
                .title_style(
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopRight));

    f.render_widget(chart, area);
}

fn axis_labels(range: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(range[0]),
        format_axis_label((range[0] + range[1]) / 2.0),
        format_axis_label(range[1]),
    ]
}

/// Largest rect centered in `area` whose on-screen shape is `aspect` wide per
/// unit tall, given terminal cells `cell_aspect` times taller than wide.
pub fn fit_aspect(area: Rect, aspect: f64, cell_aspect: f64) -> Rect {
    let usable = |v: f64| v.is_normal() && v > 0.0;
    if area.width == 0 || area.height == 0 || !usable(aspect) || !usable(cell_aspect) {
        return area;
    }

    let cols_per_row = aspect * cell_aspect;
    let wanted_width = (area.height as f64 * cols_per_row).round();

    let (width, height) = if wanted_width <= area.width as f64 {
        (wanted_width as u16, area.height)
    } else {
        let height = (area.width as f64 / cols_per_row).round() as u16;
        (area.width, height.clamp(1, area.height))
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
