//! Utility types and helpers.
//!
//! This module provides the chart configuration and number formatting
//! shared by the figure model and the renderer.

mod chart_config;
mod formatters;

pub use chart_config::{ChartConfig, FigureSize};
pub use formatters::format_axis_label;
