//! Unit-square normalization for raw curves.
//!
//! Both generators produce raw `(x, y)` sequences in arbitrary curve
//! units and pass them through this transform explicitly. Each axis is
//! offset to a zero minimum and scaled to a unit maximum independently,
//! so aspect ratio is not preserved.

use gazecal_common::{GazecalError, GazecalResult};
use gazecal_trajectory_model::Trajectory;

/// Normalize raw curve sequences into `[0, 1] × [0, 1]`.
///
/// Fails with [`GazecalError::DegenerateCurve`] rather than emitting
/// NaN/Inf when an axis is empty, constant, or non-finite.
pub fn normalize_unit_square(mut x: Vec<f64>, mut y: Vec<f64>) -> GazecalResult<Trajectory> {
    if x.len() != y.len() {
        return Err(GazecalError::stimulus(format!(
            "axis lengths differ: x={}, y={}",
            x.len(),
            y.len()
        )));
    }
    normalize_axis(&mut x, "x")?;
    normalize_axis(&mut y, "y")?;
    Ok(Trajectory { x, y })
}

/// Normalize one axis in place: subtract the minimum, then divide by the
/// post-subtraction maximum.
fn normalize_axis(values: &mut [f64], axis: &str) -> GazecalResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(GazecalError::degenerate_curve(format!(
            "{axis} axis contains non-finite values"
        )));
    }
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Err(GazecalError::degenerate_curve(format!(
            "{axis} axis has no samples"
        )));
    };

    for v in values.iter_mut() {
        *v -= min;
    }

    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return Err(GazecalError::degenerate_curve(format!(
            "{axis} axis has zero range"
        )));
    }

    for v in values.iter_mut() {
        *v /= max;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_each_axis_independently() {
        let t = normalize_unit_square(vec![2.0, 4.0, 3.0], vec![-1.0, 0.0, 7.0]).unwrap();
        assert_eq!(t.x, vec![0.0, 1.0, 0.5]);
        assert!((t.y[0]).abs() < 1e-12);
        assert!((t.y[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_axis_is_degenerate() {
        let result = normalize_unit_square(vec![1.0, 1.0, 1.0], vec![0.0, 1.0, 2.0]);
        assert!(matches!(
            result,
            Err(GazecalError::DegenerateCurve { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_degenerate() {
        let result = normalize_unit_square(vec![], vec![]);
        assert!(matches!(
            result,
            Err(GazecalError::DegenerateCurve { .. })
        ));
    }

    #[test]
    fn test_non_finite_input_is_rejected_not_propagated() {
        let result = normalize_unit_square(vec![0.0, f64::NAN], vec![0.0, 1.0]);
        assert!(matches!(
            result,
            Err(GazecalError::DegenerateCurve { .. })
        ));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = normalize_unit_square(vec![0.0, 1.0], vec![0.0]);
        assert!(matches!(result, Err(GazecalError::Stimulus { .. })));
    }
}
