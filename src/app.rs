//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::data::TrajectoryReader;
use crate::error::Result;
use crate::plot::{trajectory_figure, Figure};
use crate::util::{format_number, ChartLayoutConfig};

/// Default input file, written by the trajectory simulator.
pub const DEFAULT_INPUT: &str = "rocket_simulation.csv";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current file path.
    pub file_path: PathBuf,
    /// Chart being displayed.
    pub figure: Figure,
    /// Chart layout settings.
    pub layout: ChartLayoutConfig,
    /// Status message.
    pub status: String,
    /// Error message from the last failed reload.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Load the trajectory file and build its chart.
    ///
    /// Fails before any display is set up if the file cannot be read or
    /// lacks the position columns.
    pub fn load(file_path: PathBuf, layout: ChartLayoutConfig) -> Result<Self> {
        let figure = build_figure(&file_path, &layout)?;
        tracing::info!("Loaded {}", file_path.display());
        Ok(Self::with_figure(file_path, figure, layout))
    }

    /// Create an application around an already built figure.
    pub fn with_figure(file_path: PathBuf, figure: Figure, layout: ChartLayoutConfig) -> Self {
        let status = loaded_status(&file_path, &figure);
        Self {
            file_path,
            figure,
            layout,
            status,
            error_message: None,
            theme: Theme::GruvboxDark,
        }
    }

    /// Re-read the file from disk. On failure the current chart is kept.
    pub fn reload(&mut self) {
        match build_figure(&self.file_path, &self.layout) {
            Ok(figure) => {
                self.status = loaded_status(&self.file_path, &figure);
                self.figure = figure;
                self.error_message = None;
                tracing::info!("Reloaded {}", self.file_path.display());
            }
            Err(e) => {
                self.error_message = Some(format!("Reload failed: {}", e));
                tracing::error!("Reload failed: {}", e);
            }
        }
    }

    /// Cycle to the next theme. Clears any reload error so the change shows.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.error_message = None;
        self.status = format!("Theme: {}", self.theme.name());
    }
}

fn build_figure(path: &Path, layout: &ChartLayoutConfig) -> Result<Figure> {
    let table = TrajectoryReader::read_file(path)?;
    trajectory_figure(&table, layout.figure)
}

fn loaded_status(path: &Path, figure: &Figure) -> String {
    format!(
        "{} loaded: {} points",
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string()),
        format_number(figure.point_count())
    )
}
