//! Random-spline stimulus generation.
//!
//! Draws a handful of random control points and fits an
//! exact-interpolation parametric cubic spline through them in draw
//! order. In pilot experiments this is the most diverse trajectory
//! family, at the cost of not being replayable from a compact coefficient
//! set — replay needs the control points themselves.

use rand::Rng;

use gazecal_common::{GazecalError, GazecalResult};
use gazecal_trajectory_model::{Point2D, StimulusRecord, StimulusSource, Trajectory};

use crate::normalize::normalize_unit_square;

/// Half-width of the square control points are drawn from (raw units).
pub const CONTROL_POINT_BOUND: f64 = 5.0;

/// Minimum control points for a cubic fit.
pub const MIN_CONTROL_POINTS: usize = 4;

/// A generated spline stimulus: the normalized trajectory plus the drawn
/// control points needed to replay the exact curve instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineStimulus {
    pub trajectory: Trajectory,
    pub control_points: Vec<Point2D>,
}

impl SplineStimulus {
    /// Package this stimulus as a storable replay record.
    pub fn to_record(&self) -> StimulusRecord {
        StimulusRecord::new(
            StimulusSource::Spline {
                control_points: self.control_points.clone(),
            },
            self.trajectory.clone(),
        )
    }
}

/// An exact-interpolation parametric cubic spline through 2D points.
///
/// The curve is parameterized by chord length normalized to `[0, 1]`;
/// both axes are fit as natural cubic splines over the shared knot
/// vector, so evaluating at a knot reproduces the control point exactly.
#[derive(Debug, Clone)]
pub struct ParametricSpline {
    knots: Vec<f64>,
    x: AxisSpline,
    y: AxisSpline,
}

impl ParametricSpline {
    /// Fit a spline through the given points in order.
    pub fn fit(points: &[Point2D]) -> GazecalResult<Self> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(GazecalError::stimulus(format!(
                "spline needs at least {MIN_CONTROL_POINTS} control points, got {}",
                points.len()
            )));
        }

        let knots = chord_length_knots(points);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let x = AxisSpline::fit(&knots, xs);
        let y = AxisSpline::fit(&knots, ys);

        Ok(Self { knots, x, y })
    }

    /// Knot parameter values, one per control point, `0.0..=1.0`.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Evaluate the curve at parameter `u` (clamped into `[0, 1]`).
    pub fn eval(&self, u: f64) -> Point2D {
        Point2D::new(self.x.eval(&self.knots, u), self.y.eval(&self.knots, u))
    }

    /// Sample the curve at `steps` equally spaced parameter values in
    /// `[0, 1]` inclusive. Returns the raw, un-normalized axes.
    pub fn sample(&self, steps: usize) -> (Vec<f64>, Vec<f64>) {
        let denom = (steps.saturating_sub(1)).max(1) as f64;
        let mut x = Vec::with_capacity(steps);
        let mut y = Vec::with_capacity(steps);
        for i in 0..steps {
            let p = self.eval(i as f64 / denom);
            x.push(p.x);
            y.push(p.y);
        }
        (x, y)
    }
}

/// Natural cubic spline over one axis: interpolation values plus second
/// derivatives at the knots.
#[derive(Debug, Clone)]
struct AxisSpline {
    values: Vec<f64>,
    second: Vec<f64>,
}

impl AxisSpline {
    /// Solve the natural-spline tridiagonal system (Thomas algorithm)
    /// for the second derivatives at the knots.
    fn fit(knots: &[f64], values: Vec<f64>) -> Self {
        let n = knots.len();
        let mut second = vec![0.0; n];
        if n < 3 {
            return Self { values, second };
        }

        let unknowns = n - 2;
        let mut c_prime = vec![0.0; unknowns];
        let mut d_prime = vec![0.0; unknowns];

        for k in 0..unknowns {
            let i = k + 1;
            let h0 = knots[i] - knots[i - 1];
            let h1 = knots[i + 1] - knots[i];
            let a = h0;
            let b = 2.0 * (h0 + h1);
            let c = h1;
            let d = 6.0 * ((values[i + 1] - values[i]) / h1 - (values[i] - values[i - 1]) / h0);

            if k == 0 {
                c_prime[k] = c / b;
                d_prime[k] = d / b;
            } else {
                let denom = b - a * c_prime[k - 1];
                c_prime[k] = c / denom;
                d_prime[k] = (d - a * d_prime[k - 1]) / denom;
            }
        }

        for k in (0..unknowns).rev() {
            let next = if k + 1 < unknowns { second[k + 2] } else { 0.0 };
            second[k + 1] = d_prime[k] - c_prime[k] * next;
        }

        Self { values, second }
    }

    fn eval(&self, knots: &[f64], u: f64) -> f64 {
        let n = knots.len();
        let u = u.clamp(knots[0], knots[n - 1]);

        let hi = knots.partition_point(|&k| k <= u).clamp(1, n - 1);
        let i = hi - 1;

        let h = knots[i + 1] - knots[i];
        let a = (knots[i + 1] - u) / h;
        let b = (u - knots[i]) / h;

        a * self.values[i]
            + b * self.values[i + 1]
            + ((a * a * a - a) * self.second[i] + (b * b * b - b) * self.second[i + 1]) * h * h
                / 6.0
    }
}

/// Knot vector from cumulative chord length, normalized to `[0, 1]`.
///
/// Coincident consecutive points contribute a uniform fallback step so
/// the knots stay strictly increasing.
fn chord_length_knots(points: &[Point2D]) -> Vec<f64> {
    let uniform = 1.0 / (points.len() - 1) as f64;
    let mut knots = Vec::with_capacity(points.len());
    knots.push(0.0);

    let mut total = 0.0;
    for pair in points.windows(2) {
        let d = pair[0].distance_to(&pair[1]);
        total += if d > f64::EPSILON { d } else { uniform };
        knots.push(total);
    }

    for k in knots.iter_mut() {
        *k /= total;
    }
    knots
}

/// Generate a normalized random-spline stimulus trajectory.
///
/// Draws `n_ctrl` control points uniformly from the
/// [`CONTROL_POINT_BOUND`] square, fits the interpolating spline, samples
/// it at `steps` parameter values, and normalizes into the unit square.
pub fn random_spline_trajectory(
    steps: usize,
    n_ctrl: usize,
    rng: &mut impl Rng,
) -> GazecalResult<SplineStimulus> {
    if steps < 2 {
        return Err(GazecalError::stimulus(format!(
            "steps must be >= 2, got {steps}"
        )));
    }
    if n_ctrl < MIN_CONTROL_POINTS {
        return Err(GazecalError::stimulus(format!(
            "n_ctrl must be >= {MIN_CONTROL_POINTS}, got {n_ctrl}"
        )));
    }

    let control_points: Vec<Point2D> = (0..n_ctrl)
        .map(|_| {
            Point2D::new(
                rng.random_range(-CONTROL_POINT_BOUND..=CONTROL_POINT_BOUND),
                rng.random_range(-CONTROL_POINT_BOUND..=CONTROL_POINT_BOUND),
            )
        })
        .collect();
    tracing::debug!(
        control_points = control_points.len(),
        steps,
        "Drew spline stimulus control points"
    );

    let spline = ParametricSpline::fit(&control_points)?;
    let (x, y) = spline.sample(steps);
    let trajectory = normalize_unit_square(x, y)?;

    Ok(SplineStimulus {
        trajectory,
        control_points,
    })
}

/// Re-fit stored control points into a normalized trajectory.
pub fn replay_spline(control_points: &[Point2D], steps: usize) -> GazecalResult<Trajectory> {
    if steps < 2 {
        return Err(GazecalError::stimulus(format!(
            "steps must be >= 2, got {steps}"
        )));
    }
    let spline = ParametricSpline::fit(control_points)?;
    let (x, y) = spline.sample(steps);
    normalize_unit_square(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_unit_range(values: &[f64]) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(min.abs() < 1e-12, "min should be 0, got {min}");
        assert!((max - 1.0).abs() < 1e-12, "max should be 1, got {max}");
    }

    #[test]
    fn test_spline_interpolates_control_points() {
        let points = vec![
            Point2D::new(-3.0, 1.0),
            Point2D::new(0.5, -2.0),
            Point2D::new(2.0, 4.0),
            Point2D::new(4.5, -4.0),
            Point2D::new(-1.0, 0.0),
        ];
        let spline = ParametricSpline::fit(&points).unwrap();

        for (knot, expected) in spline.knots().to_vec().into_iter().zip(points.iter()) {
            let p = spline.eval(knot);
            assert!(
                p.distance_to(expected) < 1e-9,
                "spline misses control point {expected:?} at u={knot}: got {p:?}"
            );
        }
    }

    #[test]
    fn test_knots_are_strictly_increasing_with_duplicates() {
        let points = vec![
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(3.0, -2.0),
            Point2D::new(0.0, 4.0),
        ];
        let spline = ParametricSpline::fit(&points).unwrap();
        let knots = spline.knots();
        assert_eq!(knots[0], 0.0);
        assert_eq!(*knots.last().unwrap(), 1.0);
        for pair in knots.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_scenario_600_steps_8_controls() {
        let mut rng = StdRng::seed_from_u64(5);
        let stimulus = random_spline_trajectory(600, 8, &mut rng).unwrap();
        let t = &stimulus.trajectory;

        assert_eq!(t.len(), 600);
        assert_eq!(stimulus.control_points.len(), 8);
        assert_unit_range(&t.x);
        assert_unit_range(&t.y);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = random_spline_trajectory(300, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_spline_trajectory(300, 6, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.control_points, b.control_points);
        assert_eq!(a.trajectory, b.trajectory);

        let c = random_spline_trajectory(300, 6, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_ne!(a.control_points, c.control_points);
    }

    #[test]
    fn test_identical_control_points_are_degenerate() {
        let points = vec![Point2D::new(2.0, 2.0); 5];
        let result = replay_spline(&points, 100);
        assert!(matches!(
            result,
            Err(GazecalError::DegenerateCurve { .. })
        ));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_spline_trajectory(1, 8, &mut rng).is_err());
        assert!(random_spline_trajectory(600, 3, &mut rng).is_err());
    }

    #[test]
    fn test_record_round_trip_and_replay() {
        let mut rng = StdRng::seed_from_u64(17);
        let stimulus = random_spline_trajectory(150, 8, &mut rng).unwrap();
        let record = stimulus.to_record();

        let json = gazecal_trajectory_model::serialize_record(&record).unwrap();
        let parsed = gazecal_trajectory_model::parse_record(&json).unwrap();
        assert_eq!(record, parsed);

        let replayed = replay_spline(&stimulus.control_points, 150).unwrap();
        for (a, b) in replayed.x.iter().zip(stimulus.trajectory.x.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalization_invariant_holds(
                seed in any::<u64>(),
                steps in 3usize..300,
                n_ctrl in 4usize..12,
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let stimulus = random_spline_trajectory(steps, n_ctrl, &mut rng).unwrap();
                let t = &stimulus.trajectory;

                prop_assert_eq!(t.len(), steps);
                for axis in [&t.x, &t.y] {
                    let min = axis.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    prop_assert!(min.abs() < 1e-12);
                    prop_assert!((max - 1.0).abs() < 1e-12);
                    prop_assert!(axis.iter().all(|v| v.is_finite()));
                }
            }
        }
    }
}
