//! CSV point set reader.

use super::{ControlPoints, PointSet, PointSetKind, SplineSamples};
use crate::error::{Result, SplineViewError};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Columns every point file must carry.
const REQUIRED_COLUMNS: [&str; 2] = ["x", "y"];

#[derive(Debug, Deserialize)]
struct PointRow {
    x: f64,
    y: f64,
}

/// Reader for comma-delimited point files with a header row.
#[derive(Debug)]
pub struct PointReader;

impl PointReader {
    /// Read the control point file.
    pub fn read_control(path: &Path) -> Result<ControlPoints> {
        Self::read_points(path, PointSetKind::Control).map(ControlPoints)
    }

    /// Read the spline sample file.
    pub fn read_spline(path: &Path) -> Result<SplineSamples> {
        Self::read_points(path, PointSetKind::Spline).map(SplineSamples)
    }

    /// Read the `x` and `y` columns of `path`, preserving row order.
    ///
    /// Extra columns are ignored. A header-only file yields an empty set.
    pub fn read_points(path: &Path, kind: PointSetKind) -> Result<PointSet> {
        let file = File::open(path).map_err(|e| SplineViewError::file_open(path.to_path_buf(), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| SplineViewError::malformed(path, describe_csv_error(&e)))?;
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(SplineViewError::malformed(
                    path,
                    format!("missing required column `{}`", column),
                ));
            }
        }

        let mut points = Vec::new();
        for (i, row) in reader.deserialize::<PointRow>().enumerate() {
            let row = row.map_err(|e| SplineViewError::malformed(path, describe_csv_error(&e)))?;
            if !row.x.is_finite() || !row.y.is_finite() {
                return Err(SplineViewError::malformed(
                    path,
                    format!("row {}: non-finite coordinate ({}, {})", i + 1, row.x, row.y),
                ));
            }
            points.push((row.x, row.y));
        }

        tracing::debug!(
            "Loaded {} {} from {}",
            points.len(),
            kind,
            path.display()
        );

        Ok(points.into_iter().collect())
    }
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => match pos {
            Some(pos) => format!(
                "line {} has {} fields, expected {}",
                pos.line(),
                len,
                expected_len
            ),
            None => format!("row has {} fields, expected {}", len, expected_len),
        },
        csv::ErrorKind::Deserialize { pos, err } => match pos {
            Some(pos) => format!("line {}: {}", pos.line(), err),
            None => err.to_string(),
        },
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_rows_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spline.csv", "x,y\n2,0\n0,0\n1.5,1.5\n");

        let samples = PointReader::read_spline(&path).unwrap();

        assert_eq!(samples.points().x(), &[2.0, 0.0, 1.5]);
        assert_eq!(samples.points().y(), &[0.0, 0.0, 1.5]);
    }

    #[test]
    fn ignores_extra_columns_and_column_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "control.csv",
            "timestamp_ms, y, x\n10, 1.0, 0.5\n20, -2, 3\n",
        );

        let control = PointReader::read_control(&path).unwrap();

        assert_eq!(control.points().x(), &[0.5, 3.0]);
        assert_eq!(control.points().y(), &[1.0, -2.0]);
    }

    #[test]
    fn header_only_file_is_an_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "control.csv", "x,y\n");

        let control = PointReader::read_control(&path).unwrap();

        assert!(control.points().is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let err = PointReader::read_control(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, SplineViewError::FileNotFound { .. }));
    }

    #[test]
    fn missing_column_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spline.csv", "x\n0\n1\n");

        let err = PointReader::read_spline(&path).unwrap_err();

        match err {
            SplineViewError::MalformedData { reason, .. } => {
                assert!(reason.contains("`y`"), "{}", reason)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spline.csv", "");

        let err = PointReader::read_spline(&path).unwrap_err();

        assert!(matches!(err, SplineViewError::MalformedData { .. }));
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "spline.csv", "x,y\n0,0\n1,abc\n");

        let err = PointReader::read_spline(&path).unwrap_err();

        assert!(matches!(err, SplineViewError::MalformedData { .. }));
    }

    #[test]
    fn short_row_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "control.csv", "x,y\n0,0\n1\n2,0\n");

        let err = PointReader::read_control(&path).unwrap_err();

        match err {
            SplineViewError::MalformedData { reason, .. } => {
                assert!(reason.contains("line 3"), "{}", reason)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_value_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "control.csv", "x,y\n0,\n");

        let err = PointReader::read_control(&path).unwrap_err();

        assert!(matches!(err, SplineViewError::MalformedData { .. }));
    }

    #[test]
    fn non_finite_value_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "control.csv", "x,y\n0,0\nNaN,1\n");

        let err = PointReader::read_control(&path).unwrap_err();

        match err {
            SplineViewError::MalformedData { reason, .. } => {
                assert!(reason.contains("row 2"), "{}", reason)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
