//! Point set representation.

use std::fmt;

/// Role a point set plays in the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointSetKind {
    /// Sparse inputs that define the spline.
    Control,
    /// Dense samples along the interpolated curve.
    Spline,
}

impl PointSetKind {
    /// Human readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PointSetKind::Control => "control points",
            PointSetKind::Spline => "spline samples",
        }
    }
}

impl fmt::Display for PointSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned extent of a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest and largest x.
    pub x: (f64, f64),
    /// Smallest and largest y.
    pub y: (f64, f64),
}

impl Extent {
    /// Smallest extent covering both `self` and `other`.
    pub fn union(self, other: Extent) -> Extent {
        Extent {
            x: (self.x.0.min(other.x.0), self.x.1.max(other.x.1)),
            y: (self.y.0.min(other.y.0), self.y.1.max(other.y.1)),
        }
    }
}

/// Ordered 2-D points stored as an `x` column and a `y` column.
///
/// Row order is significant and never changed after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PointSet {
    /// Build a point set from its two columns.
    ///
    /// Lengths are not checked here; the renderer rejects mismatched columns.
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    /// The `x` column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The `y` column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of complete points.
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// Whether the set has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both columns have the same length.
    pub fn is_aligned(&self) -> bool {
        self.x.len() == self.y.len()
    }

    /// Iterate over `(x, y)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Bounding extent, or `None` for an empty set.
    pub fn extent(&self) -> Option<Extent> {
        let mut points = self.iter();
        let (x0, y0) = points.next()?;
        Some(points.fold(
            Extent {
                x: (x0, x0),
                y: (y0, y0),
            },
            |e, (x, y)| Extent {
                x: (e.x.0.min(x), e.x.1.max(x)),
                y: (e.y.0.min(y), e.y.1.max(y)),
            },
        ))
    }
}

impl FromIterator<(f64, f64)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().unzip();
        Self { x, y }
    }
}

/// The sparse control points that generated the spline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints(pub PointSet);

impl ControlPoints {
    /// Role of this set.
    pub const KIND: PointSetKind = PointSetKind::Control;

    /// Underlying points.
    pub fn points(&self) -> &PointSet {
        &self.0
    }
}

/// The dense samples along the interpolated spline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplineSamples(pub PointSet);

impl SplineSamples {
    /// Role of this set.
    pub const KIND: PointSetKind = PointSetKind::Spline;

    /// Underlying points.
    pub fn points(&self) -> &PointSet {
        &self.0
    }
}
