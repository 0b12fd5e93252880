//! Chart configuration.

use ratatui::style::Color;
use ratatui::symbols::Marker;

/// Figure size in figure units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    /// Width in figure units.
    pub width: f64,
    /// Height in figure units.
    pub height: f64,
}

impl FigureSize {
    /// Terminal columns per horizontal figure unit.
    pub const COLUMNS_PER_UNIT: f64 = 10.0;
    /// Terminal rows per vertical figure unit.
    pub const ROWS_PER_UNIT: f64 = 5.0;

    /// Size in terminal cells as `(columns, rows)`.
    pub fn cells(&self) -> (u16, u16) {
        let to_cells = |units: f64, per_unit: f64| -> u16 {
            (units * per_unit).round().clamp(1.0, f64::from(u16::MAX)) as u16
        };
        (
            to_cells(self.width, Self::COLUMNS_PER_UNIT),
            to_cells(self.height, Self::ROWS_PER_UNIT),
        )
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 6.0,
        }
    }
}

/// Titles, labels and series styling for the spline figure.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Figure title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Legend label of the spline trace.
    pub spline_label: String,
    /// Legend label of the control point scatter.
    pub control_label: String,
    /// Color of the spline trace and its point markers.
    pub spline_color: Color,
    /// Color of the control point scatter.
    pub control_color: Color,
    /// Marker drawn at every spline sample.
    pub marker_style: Marker,
    /// Size of the figure.
    pub figure_size: FigureSize,
    /// Draw the background grid.
    pub grid: bool,
    /// Color of the grid lines.
    pub grid_color: Color,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Catmull-Rom Spline Visualization".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            spline_label: "Catmull-Rom Spline".to_string(),
            control_label: "Control Points".to_string(),
            spline_color: Color::Rgb(31, 119, 180),
            control_color: Color::Red,
            marker_style: Marker::Dot,
            figure_size: FigureSize::default(),
            grid: true,
            grid_color: Color::DarkGray,
        }
    }
}
