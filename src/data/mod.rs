//! Data reading and representation.
//!
//! This module handles reading the control point and spline sample CSV files
//! and holding them as column-oriented point sets.

mod points;
mod reader;

pub use points::{ControlPoints, Extent, PointSet, PointSetKind, SplineSamples};
pub use reader::PointReader;
