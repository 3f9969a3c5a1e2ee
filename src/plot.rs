//! Chart model for the trajectory plot.
//!
//! A [`Figure`] accumulates the elements of one chart (a line series and the
//! reference circles) before anything is drawn. Rendering lives in
//! [`crate::ui`].

use crate::data::{TrajectoryTable, X_COLUMN, Y_COLUMN};
use crate::error::Result;
use crate::util::FigureSize;
use std::f64::consts::TAU;

/// Chart title.
pub const CHART_TITLE: &str = "Rocket Position Over Time";
/// Legend label of the trajectory series.
pub const SERIES_LABEL: &str = "X Position (m)";
/// Horizontal axis label.
pub const X_AXIS_LABEL: &str = "Position (x)";
/// Vertical axis label.
pub const Y_AXIS_LABEL: &str = "Position (y)";
/// Radius of the inner reference circle, in meters.
pub const INNER_RADIUS_M: f64 = 63_780.0;
/// Radius of the outer reference circle, in meters.
pub const OUTER_RADIUS_M: f64 = 2_500_000.0;
/// Largest coordinate magnitude that is drawn. Farther points are skipped.
pub const MAX_PLOT_COORD: f64 = 1e150;

/// Whether a point is finite and within [`MAX_PLOT_COORD`] on both axes.
pub fn is_plottable(&(x, y): &(f64, f64)) -> bool {
    x.is_finite() && y.is_finite() && x.abs() <= MAX_PLOT_COORD && y.abs() <= MAX_PLOT_COORD
}

/// Named colors for chart overlays, resolved against the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayColor {
    /// Blue outline.
    Blue,
    /// Red outline.
    Red,
}

/// Axis-aligned data extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Horizontal `[min, max]`.
    pub x: [f64; 2],
    /// Vertical `[min, max]`.
    pub y: [f64; 2],
}

impl Bounds {
    /// Smallest bounds containing all plottable points, if any.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        points
            .iter()
            .filter(|p| is_plottable(p))
            .fold(None, |acc: Option<Bounds>, &(x, y)| {
                let point = Bounds {
                    x: [x, x],
                    y: [y, y],
                };
                Some(match acc {
                    Some(b) => b.union(&point),
                    None => point,
                })
            })
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x: [self.x[0].min(other.x[0]), self.x[1].max(other.x[1])],
            y: [self.y[0].min(other.y[0]), self.y[1].max(other.y[1])],
        }
    }

    /// Pad each side by `factor` of the span. A zero span is padded by one unit.
    ///
    /// The result never leaves `±MAX_PLOT_COORD`.
    pub fn with_margin(&self, factor: f64) -> Bounds {
        fn pad(range: [f64; 2], factor: f64) -> [f64; 2] {
            let span = range[1] - range[0];
            let delta = if span > 0.0 { span * factor } else { 1.0 };
            [
                (range[0] - delta).max(-MAX_PLOT_COORD),
                (range[1] + delta).min(MAX_PLOT_COORD),
            ]
        }
        Bounds {
            x: pad(self.x, factor),
            y: pad(self.y, factor),
        }
    }
}

/// An unfilled circle overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCircle {
    /// Center in data coordinates.
    pub center: (f64, f64),
    /// Radius in data units.
    pub radius: f64,
    /// Outline color.
    pub color: OverlayColor,
}

impl ReferenceCircle {
    /// Outline-only circle centered at the origin.
    pub fn at_origin(radius: f64, color: OverlayColor) -> Self {
        Self {
            center: (0.0, 0.0),
            radius,
            color,
        }
    }

    /// Closed polyline approximating the outline with `segments` edges.
    pub fn outline(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(3);
        let (cx, cy) = self.center;
        (0..=segments)
            .map(|i| {
                let theta = TAU * i as f64 / segments as f64;
                (cx + self.radius * theta.cos(), cy + self.radius * theta.sin())
            })
            .collect()
    }

    /// Bounding box of the circle.
    pub fn bounds(&self) -> Bounds {
        let (cx, cy) = self.center;
        Bounds {
            x: [cx - self.radius, cx + self.radius],
            y: [cy - self.radius, cy + self.radius],
        }
    }
}

/// A connected line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    /// Legend label.
    pub label: String,
    /// Points as `(horizontal, vertical)` in row order.
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    /// Pair two columns element-wise into points.
    pub fn from_columns(label: impl Into<String>, horizontal: &[f64], vertical: &[f64]) -> Self {
        Self {
            label: label.into(),
            points: horizontal
                .iter()
                .copied()
                .zip(vertical.iter().copied())
                .collect(),
        }
    }

    /// Points that can be drawn, in order. See [`is_plottable`].
    pub fn plottable_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().copied().filter(is_plottable).collect()
    }

    /// Horizontal values in order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    /// Vertical values in order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }
}

/// A single chart with one set of axes.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Figure size (aspect ratio).
    pub size: FigureSize,
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Plotted line series.
    pub series: Vec<LineSeries>,
    /// Circle overlays.
    pub circles: Vec<ReferenceCircle>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new(size: FigureSize) -> Self {
        Self {
            size,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            circles: Vec::new(),
        }
    }

    /// Extent of every element, series and circles alike.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let series = self
            .series
            .iter()
            .filter_map(|s| Bounds::from_points(&s.points));
        let circles = self.circles.iter().map(ReferenceCircle::bounds);

        series.chain(circles).reduce(|a, b| a.union(&b))
    }

    /// Axis bounds to display, padded by `margin_factor`.
    pub fn view_bounds(&self, margin_factor: f64) -> Bounds {
        self.data_bounds()
            .unwrap_or(Bounds {
                x: [0.0, 1.0],
                y: [0.0, 1.0],
            })
            .with_margin(margin_factor)
    }

    /// Total number of plotted points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Build the rocket position chart from a loaded table.
///
/// `Y(m)` goes on the horizontal axis and `X(m)` on the vertical axis, under
/// the labels "Position (x)" and "Position (y)".
pub fn trajectory_figure(table: &TrajectoryTable, size: FigureSize) -> Result<Figure> {
    let horizontal = table.numeric_column(Y_COLUMN)?;
    let vertical = table.numeric_column(X_COLUMN)?;

    let mut figure = Figure::new(size);
    figure
        .series
        .push(LineSeries::from_columns(SERIES_LABEL, &horizontal, &vertical));
    figure.x_label = X_AXIS_LABEL.to_string();
    figure.y_label = Y_AXIS_LABEL.to_string();
    figure.title = CHART_TITLE.to_string();
    figure
        .circles
        .push(ReferenceCircle::at_origin(INNER_RADIUS_M, OverlayColor::Blue));
    figure
        .circles
        .push(ReferenceCircle::at_origin(OUTER_RADIUS_M, OverlayColor::Red));

    tracing::debug!(
        "Built figure with {} points and {} circles",
        figure.point_count(),
        figure.circles.len()
    );

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TrajectoryReader;
    use crate::error::PlotError;
    use std::path::Path;

    fn figure_from(csv: &str) -> Result<Figure> {
        let table = TrajectoryReader::read_from(csv.as_bytes(), Path::new("mem.csv"))?;
        trajectory_figure(&table, FigureSize::default())
    }

    #[test]
    fn smoke_figure_has_one_series_two_circles_and_title() {
        let figure = figure_from("X(m),Y(m)\n0,0\n100,50\n").unwrap();
        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.circles.len(), 2);
        assert_eq!(figure.title, "Rocket Position Over Time");
        assert_eq!(figure.series[0].label, "X Position (m)");
        assert_eq!(figure.x_label, "Position (x)");
        assert_eq!(figure.y_label, "Position (y)");
        assert_eq!(figure.size.aspect_ratio(), 10.0 / 6.0);
    }

    #[test]
    fn circles_are_fixed_and_centered() {
        let figure = figure_from("X(m),Y(m)\n5,5\n").unwrap();
        let radii: Vec<f64> = figure.circles.iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![63780.0, 2500000.0]);
        assert_eq!(figure.circles[0].color, OverlayColor::Blue);
        assert_eq!(figure.circles[1].color, OverlayColor::Red);
        for circle in &figure.circles {
            assert_eq!(circle.center, (0.0, 0.0));
        }
    }

    #[test]
    fn y_column_is_horizontal_and_x_column_is_vertical() {
        let figure = figure_from("X(m),Y(m)\n1,2\n3,4\n").unwrap();
        let series = &figure.series[0];
        assert_eq!(series.xs(), vec![2.0, 4.0]);
        assert_eq!(series.ys(), vec![1.0, 3.0]);
    }

    #[test]
    fn missing_y_column_fails_with_missing_column() {
        let err = figure_from("X(m),Z(m)\n1,2\n").unwrap_err();
        assert!(matches!(err, PlotError::MissingColumn { ref column } if column == "Y(m)"));
    }

    #[test]
    fn non_numeric_cell_fails() {
        let err = figure_from("X(m),Y(m)\n1,abc\n").unwrap_err();
        assert!(matches!(err, PlotError::InvalidValue { row: 1, .. }));
    }

    #[test]
    fn view_bounds_cover_outer_circle_with_margin() {
        let figure = figure_from("X(m),Y(m)\n0,0\n100,50\n").unwrap();
        let bounds = figure.view_bounds(0.05);
        let pad = 5_000_000.0 * 0.05;
        assert_eq!(bounds.x, [-2_500_000.0 - pad, 2_500_000.0 + pad]);
        assert_eq!(bounds.y, [-2_500_000.0 - pad, 2_500_000.0 + pad]);
    }

    #[test]
    fn series_outside_circles_extends_bounds() {
        let figure = figure_from("X(m),Y(m)\n4000000,-3000000\n").unwrap();
        let bounds = figure.data_bounds().unwrap();
        assert_eq!(bounds.x, [-3_000_000.0, 2_500_000.0]);
        assert_eq!(bounds.y, [-2_500_000.0, 4_000_000.0]);
    }

    #[test]
    fn outline_is_closed_and_on_radius() {
        let circle = ReferenceCircle::at_origin(10.0, OverlayColor::Blue);
        let outline = circle.outline(36);
        assert_eq!(outline.len(), 37);
        let first = outline[0];
        let last = outline[36];
        assert!((first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9);
        for (x, y) in outline {
            assert!(((x * x + y * y).sqrt() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn extreme_coordinates_keep_view_bounded() {
        let figure = figure_from("X(m),Y(m)\n1e307,-1e307\n0,0\n").unwrap();
        let bounds = figure.view_bounds(0.05);
        for v in bounds.x.iter().chain(bounds.y.iter()) {
            assert!(v.is_finite() && v.abs() <= MAX_PLOT_COORD);
        }
        assert_eq!(figure.series[0].plottable_points(), vec![(0.0, 0.0)]);
    }

    #[test]
    fn margin_is_clamped_near_limit() {
        let bounds = Bounds {
            x: [-MAX_PLOT_COORD, MAX_PLOT_COORD],
            y: [0.0, 0.0],
        }
        .with_margin(0.05);
        assert_eq!(bounds.x, [-MAX_PLOT_COORD, MAX_PLOT_COORD]);
        assert_eq!(bounds.y, [-1.0, 1.0]);
    }

    #[test]
    fn empty_figure_gets_unit_view() {
        let bounds = Figure::new(FigureSize::default()).view_bounds(0.0);
        assert_eq!(bounds.x, [0.0, 1.0]);
    }
}
