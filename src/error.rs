//! Error types for splineview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

use crate::data::PointSetKind;

/// Result type alias for splineview operations.
pub type Result<T> = std::result::Result<T, SplineViewError>;

/// Errors that can occur while loading or rendering point sets.
#[derive(Debug, Error)]
pub enum SplineViewError {
    /// Input path does not resolve to a file.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Failed to open a file for a reason other than it being missing.
    #[error("Failed to open file: {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Required columns are absent or values are not usable numbers.
    #[error("Malformed data in {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// A point set has no rows, so there is nothing to draw.
    #[error("Empty dataset: {dataset} has no points")]
    EmptyDataset { dataset: PointSetKind },

    /// A point set has coordinate columns of different lengths.
    #[error("Dimension mismatch in {dataset}: {x_len} x values but {y_len} y values")]
    DimensionMismatch {
        dataset: PointSetKind,
        x_len: usize,
        y_len: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl SplineViewError {
    /// Classify a failure to open `path`.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileOpen { path, source }
        }
    }

    /// Create a MalformedData error.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_file_is_classified_as_not_found() {
        let err = SplineViewError::file_open(
            PathBuf::from("nope.csv"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SplineViewError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: nope.csv");
    }

    #[test]
    fn other_open_failures_keep_their_source() {
        let err = SplineViewError::file_open(
            PathBuf::from("locked.csv"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, SplineViewError::FileOpen { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn render_errors_name_the_dataset() {
        let err = SplineViewError::DimensionMismatch {
            dataset: PointSetKind::Control,
            x_len: 3,
            y_len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in control points: 3 x values but 2 y values"
        );
    }
}
