//! Figure model - everything the renderer needs, validated and laid out.
//!
//! Building a [`Figure`] checks both point sets, computes shared axis bounds
//! and ticks, and derives the grid. Drawing lives in [`crate::ui`].

mod axis;

pub use axis::AxisLayout;

use crate::data::{ControlPoints, Extent, PointSet, PointSetKind, SplineSamples};
use crate::error::{Result, SplineViewError};
use crate::util::ChartConfig;

/// A line segment in data coordinates.
pub type Segment = [(f64, f64); 2];

/// Static figure comparing spline samples against their control points.
#[derive(Debug, Clone)]
pub struct Figure {
    config: ChartConfig,
    spline_trace: Vec<(f64, f64)>,
    control_scatter: Vec<(f64, f64)>,
    x_axis: AxisLayout,
    y_axis: AxisLayout,
    grid_lines: Vec<Segment>,
}

impl Figure {
    /// Validate both point sets and lay out the figure.
    ///
    /// Fails with `DimensionMismatch` when a set's columns differ in length
    /// and with `EmptyDataset` when a set has no points.
    pub fn build(
        control: &ControlPoints,
        spline: &SplineSamples,
        config: &ChartConfig,
    ) -> Result<Self> {
        let control_extent = renderable_extent(control.points(), ControlPoints::KIND)?;
        let spline_extent = renderable_extent(spline.points(), SplineSamples::KIND)?;
        tracing::debug!(
            "Extents: control x={:?} y={:?}, spline x={:?} y={:?}",
            control_extent.x,
            control_extent.y,
            spline_extent.x,
            spline_extent.y
        );

        let extent = control_extent.union(spline_extent);
        let x_axis = AxisLayout::from_range(extent.x.0, extent.x.1);
        let y_axis = AxisLayout::from_range(extent.y.0, extent.y.1);
        let grid_lines = if config.grid {
            grid_segments(&x_axis, &y_axis)
        } else {
            Vec::new()
        };

        let to_plot = |(x, y): (f64, f64)| (x_axis.to_plot(x), y_axis.to_plot(y));
        let spline_trace = spline.points().iter().map(to_plot).collect();
        let control_scatter = control.points().iter().map(to_plot).collect();

        Ok(Self {
            config: config.clone(),
            spline_trace,
            control_scatter,
            x_axis,
            y_axis,
            grid_lines,
        })
    }

    /// Configuration the figure was built with.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Spline samples in draw order, in plot coordinates.
    pub fn spline_trace(&self) -> &[(f64, f64)] {
        &self.spline_trace
    }

    /// Control points, in plot coordinates.
    pub fn control_scatter(&self) -> &[(f64, f64)] {
        &self.control_scatter
    }

    /// Horizontal axis layout.
    pub fn x_axis(&self) -> &AxisLayout {
        &self.x_axis
    }

    /// Vertical axis layout.
    pub fn y_axis(&self) -> &AxisLayout {
        &self.y_axis
    }

    /// Background grid lines, one per interior tick.
    pub fn grid_lines(&self) -> &[Segment] {
        &self.grid_lines
    }

    /// Labels shown in the legend, in draw order.
    pub fn legend_labels(&self) -> [&str; 2] {
        [
            self.config.spline_label.as_str(),
            self.config.control_label.as_str(),
        ]
    }
}

fn renderable_extent(points: &PointSet, kind: PointSetKind) -> Result<Extent> {
    if !points.is_aligned() {
        return Err(SplineViewError::DimensionMismatch {
            dataset: kind,
            x_len: points.x().len(),
            y_len: points.y().len(),
        });
    }
    points
        .extent()
        .ok_or(SplineViewError::EmptyDataset { dataset: kind })
}

fn grid_segments(x_axis: &AxisLayout, y_axis: &AxisLayout) -> Vec<Segment> {
    let [x_lo, x_hi] = x_axis.bounds();
    let [y_lo, y_hi] = y_axis.bounds();
    let interior = |axis: &AxisLayout| -> Vec<f64> {
        match axis.ticks().len() {
            0..=2 => Vec::new(),
            n => axis.ticks()[1..n - 1]
                .iter()
                .map(|&t| axis.to_plot(t))
                .collect(),
        }
    };

    let vertical = interior(x_axis)
        .into_iter()
        .map(|x| [(x, y_lo), (x, y_hi)]);
    let horizontal = interior(y_axis)
        .into_iter()
        .map(|y| [(x_lo, y), (x_hi, y)]);
    vertical.chain(horizontal).collect()
}
