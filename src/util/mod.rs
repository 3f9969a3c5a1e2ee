//! Utility functions.
//!
//! This module provides layout configuration and value formatting helpers.

mod formatters;
mod layout_config;

pub use formatters::{format_axis_label, format_number};
pub use layout_config::{ChartLayoutConfig, FigureSize};
