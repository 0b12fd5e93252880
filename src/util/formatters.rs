//! Shared formatting utilities.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-12 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.3}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(-1e-15), "0");
        assert_eq!(format_axis_label(0.25), "0.250");
        assert_eq!(format_axis_label(1.5), "1.50");
        assert_eq!(format_axis_label(-250.4), "-250");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }
}
