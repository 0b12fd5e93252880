//! Axis bounds and tick placement.

use crate::util::format_axis_label;

/// Fraction of the data range added as margin on each side.
const MARGIN_FACTOR: f64 = 0.05;
/// Half-width used when all values on an axis are equal.
const DEGENERATE_HALF_WIDTH: f64 = 0.5;
/// Ticks per axis, including both ends.
const TICK_COUNT: usize = 5;
/// Widest span drawn without rescaling; the chart canvas multiplies offsets
/// by its resolution, which must not overflow.
const MAX_PLOT_SPAN: f64 = 1e300;
/// Power of two applied to coordinates of axes wider than `MAX_PLOT_SPAN`.
const WIDE_AXIS_SCALE: f64 = 1.0 / 18_446_744_073_709_551_616.0; // 2^-64

/// Bounds and evenly spaced ticks for one axis.
///
/// Ticks and labels are in data coordinates. Bounds are in plot coordinates,
/// which equal data coordinates except on extremely wide axes, where both are
/// scaled by an exact power of two so the span stays finite.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    bounds: [f64; 2],
    ticks: Vec<f64>,
    scale: f64,
}

impl AxisLayout {
    /// Lay out an axis covering the data range `min..=max`.
    pub fn from_range(min: f64, max: f64) -> Self {
        // Scaled before subtracting so huge finite ranges cannot overflow
        let margin = max * MARGIN_FACTOR - min * MARGIN_FACTOR;
        let magnitude = min.abs().max(max.abs()).max(1.0);
        let (lo, hi) = if margin > f64::EPSILON * MARGIN_FACTOR * magnitude {
            (min - margin, max + margin)
        } else {
            let half = DEGENERATE_HALF_WIDTH.max(magnitude * MARGIN_FACTOR);
            (min - half, max + half)
        };
        let lo = lo.max(f64::MIN);
        let hi = hi.min(f64::MAX);

        let scale = if (hi - lo) <= MAX_PLOT_SPAN {
            1.0
        } else {
            WIDE_AXIS_SCALE
        };

        let last = (TICK_COUNT - 1) as f64;
        let ticks = (0..TICK_COUNT)
            .map(|i| {
                let t = i as f64 / last;
                lo * (1.0 - t) + hi * t
            })
            .collect();

        Self {
            bounds: [lo * scale, hi * scale],
            ticks,
            scale,
        }
    }

    /// Lower and upper bound in plot coordinates.
    pub fn bounds(&self) -> [f64; 2] {
        self.bounds
    }

    /// Tick positions in data coordinates, from lower to upper bound.
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Map a data coordinate onto the plot.
    pub fn to_plot(&self, value: f64) -> f64 {
        value * self.scale
    }

    /// Formatted tick labels.
    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|&t| format_axis_label(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_the_data_range() {
        let axis = AxisLayout::from_range(0.0, 2.0);
        let [lo, hi] = axis.bounds();
        assert!((lo + 0.1).abs() < 1e-12);
        assert!((hi - 2.1).abs() < 1e-12);
        assert_eq!(axis.to_plot(1.5), 1.5);
    }

    #[test]
    fn ticks_span_the_bounds_evenly() {
        let axis = AxisLayout::from_range(0.0, 2.0);
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], axis.bounds()[0]);
        assert_eq!(ticks[4], axis.bounds()[1]);
        assert!((ticks[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn widens_a_degenerate_range() {
        let axis = AxisLayout::from_range(3.0, 3.0);
        assert_eq!(axis.bounds(), [2.5, 3.5]);
    }

    #[test]
    fn labels_follow_ticks() {
        let axis = AxisLayout::from_range(0.0, 2.0);
        assert_eq!(axis.labels()[4], "2.10");
    }

    #[test]
    fn large_magnitudes_keep_their_margin() {
        let axis = AxisLayout::from_range(1e6, 3e6);
        let [lo, hi] = axis.bounds();
        assert!((lo - 0.9e6).abs() < 1e-6);
        assert!((hi - 3.1e6).abs() < 1e-6);
    }

    #[test]
    fn range_near_the_f64_limits_stays_finite() {
        let axis = AxisLayout::from_range(-1e308, 1e308);

        let [lo, hi] = axis.bounds();
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < hi);
        assert!((hi - lo).is_finite());
        assert!(axis.ticks().iter().all(|t| t.is_finite()));
        assert!(axis.ticks()[0] < -1e308 && axis.ticks()[4] > 1e308);
        assert!(axis.labels().iter().all(|l| l != "?"));

        let plotted = axis.to_plot(1e308);
        assert!(plotted > lo && plotted < hi);
        // Canvas resolution times the offset must not overflow
        assert!(((plotted - lo) * 1e4).is_finite());
    }

    #[test]
    fn extreme_values_are_clamped_to_finite_bounds() {
        let axis = AxisLayout::from_range(f64::MIN, f64::MAX);
        assert_eq!(axis.ticks()[0], f64::MIN);
        assert_eq!(axis.ticks()[4], f64::MAX);
        assert!(axis.ticks().iter().all(|t| t.is_finite()));
        assert!(axis.bounds().iter().all(|b| b.is_finite()));

        let degenerate = AxisLayout::from_range(f64::MAX, f64::MAX);
        let [lo, hi] = degenerate.bounds();
        assert!(lo.is_finite() && hi.is_finite() && lo < hi);
        assert!(degenerate.ticks().iter().all(|t| t.is_finite()));
    }
}
