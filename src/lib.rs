//! Rocketplot - a terminal plot of simulated rocket trajectories.
//!
//! Rocketplot reads the CSV written by a rocket trajectory simulator and draws
//! the position track together with two reference circles around the origin.
//!
//! # Features
//!
//! - CSV loading into a table keyed by column name
//! - Line chart of `Y(m)` against `X(m)`
//! - Unfilled reference circles at radius 63780 m and 2500000 m
//! - Reload from disk and Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use rocketplot::data::TrajectoryReader;
//! use rocketplot::plot::trajectory_figure;
//! use rocketplot::util::FigureSize;
//! use std::path::Path;
//!
//! let table = TrajectoryReader::read_file(Path::new("rocket_simulation.csv"))?;
//! let figure = trajectory_figure(&table, FigureSize::default())?;
//! println!("{} with {} points", figure.title, figure.point_count());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{PlotError, Result};
