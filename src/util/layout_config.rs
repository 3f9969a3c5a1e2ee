//! Layout configuration constants for the chart view.

/// Figure size in abstract units; only the ratio matters on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    /// Figure width.
    pub width: f64,
    /// Figure height.
    pub height: f64,
}

impl FigureSize {
    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 6.0,
        }
    }
}

/// Configuration for the chart layout.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Figure size used to fit the chart area.
    pub figure: FigureSize,
    /// Fraction of the data span added on each side of the axes.
    pub margin_factor: f64,
    /// Number of straight segments used to outline a circle.
    pub circle_segments: usize,
    /// Terminal cell height divided by cell width.
    pub cell_aspect: f64,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            figure: FigureSize::default(),
            margin_factor: 0.05,
            circle_segments: 360,
            cell_aspect: 2.0, // cells are roughly twice as tall as wide
        }
    }
}
