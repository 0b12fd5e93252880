//! Splineview - a terminal viewer comparing a sampled Catmull-Rom spline
//! against the control points that generated it.
//!
//! The spline itself is computed elsewhere and written to two CSV files with
//! `x` and `y` columns. Splineview loads both, overlays them on one set of
//! axes (connected trace for the samples, red scatter for the control points)
//! and shows the figure until the user closes it.
//!
//! # Example
//!
//! ```no_run
//! use splineview::app::App;
//! use splineview::surface::HeadlessSurface;
//!
//! let app = App::new("control_points.csv", "spline_points.csv");
//! let mut surface = HeadlessSurface::new(100, 36)?;
//! app.run(&mut surface)?;
//! println!("{}", surface.to_text());
//! # Ok::<(), splineview::SplineViewError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod surface;
pub mod ui;
pub mod util;

pub use error::{Result, SplineViewError};
