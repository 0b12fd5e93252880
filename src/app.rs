//! Application pipeline: load both point sets, build the figure, present it.

use std::path::PathBuf;

use crate::chart::Figure;
use crate::data::{ControlPoints, PointReader, SplineSamples};
use crate::error::Result;
use crate::surface::Presenter;
use crate::util::ChartConfig;

/// Default control point file, written by the spline generator.
pub const DEFAULT_CONTROL_FILE: &str = "control_points.csv";
/// Default spline sample file, written by the spline generator.
pub const DEFAULT_SPLINE_FILE: &str = "spline_points.csv";

/// One visualization run.
#[derive(Debug, Clone)]
pub struct App {
    /// Path to the control point file.
    pub control_path: PathBuf,
    /// Path to the spline sample file.
    pub spline_path: PathBuf,
    /// Figure configuration.
    pub config: ChartConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROL_FILE, DEFAULT_SPLINE_FILE)
    }
}

impl App {
    /// Create a run over the given files with the default figure configuration.
    pub fn new(control_path: impl Into<PathBuf>, spline_path: impl Into<PathBuf>) -> Self {
        Self {
            control_path: control_path.into(),
            spline_path: spline_path.into(),
            config: ChartConfig::default(),
        }
    }

    /// Replace the figure configuration.
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Load control points, then spline samples.
    pub fn load(&self) -> Result<(ControlPoints, SplineSamples)> {
        let control = PointReader::read_control(&self.control_path)?;
        let spline = PointReader::read_spline(&self.spline_path)?;
        Ok((control, spline))
    }

    /// Load both files and lay out the figure without presenting it.
    pub fn prepare(&self) -> Result<Figure> {
        let (control, spline) = self.load()?;
        let figure = Figure::build(&control, &spline, &self.config)?;
        tracing::info!(
            "Prepared figure: {} spline samples, {} control points",
            figure.spline_trace().len(),
            figure.control_scatter().len()
        );
        Ok(figure)
    }

    /// Prepare the figure and present it on `presenter`.
    ///
    /// Nothing is presented if loading or validation fails.
    pub fn run<P: Presenter>(&self, presenter: &mut P) -> Result<()> {
        let figure = self.prepare()?;
        presenter.present(&figure)
    }
}
