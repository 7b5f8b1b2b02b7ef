//! Fourier-harmonic stimulus generation.
//!
//! Reproduces the legacy stimulus shape family: a randomized harmonic sum
//! whose coefficient set is shared by both axes (cosine for x, sine for
//! y), constraining the raw curve to a rotational family rather than an
//! arbitrary Lissajous figure. That coupling is what makes recorded
//! trials comparable across devices, so it must not be "fixed" into
//! independent per-axis draws.

use std::f64::consts::TAU;

use rand::Rng;

use gazecal_common::{GazecalError, GazecalResult};
use gazecal_trajectory_model::{
    HarmonicCoefficient, StimulusRecord, StimulusSource, Trajectory,
};

use crate::normalize::normalize_unit_square;

/// Base-harmonic amplitude draw range.
pub const BASE_AMPLITUDE_RANGE: (f64, f64) = (0.3, 0.8);

/// Per-harmonic amplitude decay draw range.
///
/// Harmonic `i` gets `base_amplitude * decay / i²`, so the spectrum
/// falls off faster than `1/i²` and the curve keeps bounded curvature
/// a subject can visually track.
pub const AMPLITUDE_DECAY_RANGE: (f64, f64) = (4.0, 7.0);

/// A generated Fourier stimulus: the normalized trajectory plus the
/// coefficient set needed to replay the exact curve instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierStimulus {
    pub trajectory: Trajectory,
    pub coefficients: Vec<HarmonicCoefficient>,
}

impl FourierStimulus {
    /// Package this stimulus as a storable replay record.
    pub fn to_record(&self) -> StimulusRecord {
        StimulusRecord::new(
            StimulusSource::Fourier {
                coefficients: self.coefficients.clone(),
            },
            self.trajectory.clone(),
        )
    }
}

/// Draw a randomized harmonic coefficient set.
///
/// The base harmonic has frequency 1 and amplitude in
/// [`BASE_AMPLITUDE_RANGE`]; each subsequent harmonic `i` draws its own
/// decay factor and phase. Phases are uniform in `[0, 2π)`.
pub fn draw_harmonics(harmonics_count: usize, rng: &mut impl Rng) -> Vec<HarmonicCoefficient> {
    let (amp_min, amp_max) = BASE_AMPLITUDE_RANGE;
    let base_amplitude = rng.random_range(amp_min..=amp_max);
    let base_phase = rng.random_range(0.0..TAU);

    let mut coefficients = Vec::with_capacity(harmonics_count);
    coefficients.push(HarmonicCoefficient::new(base_amplitude, 1.0, base_phase));

    for i in 2..=harmonics_count {
        let (decay_min, decay_max) = AMPLITUDE_DECAY_RANGE;
        let decay = rng.random_range(decay_min..=decay_max);
        let amplitude = base_amplitude * decay / (i * i) as f64;
        let phase = rng.random_range(0.0..TAU);
        coefficients.push(HarmonicCoefficient::new(amplitude, i as f64, phase));
    }

    coefficients
}

/// Evaluate a coefficient set over `steps` equally spaced parameter
/// values in `[0, 2π]` inclusive. Returns the raw, un-normalized axes.
pub fn evaluate_harmonics(
    coefficients: &[HarmonicCoefficient],
    steps: usize,
) -> (Vec<f64>, Vec<f64>) {
    let mut x = vec![0.0; steps];
    let mut y = vec![0.0; steps];
    let denom = (steps.saturating_sub(1)).max(1) as f64;

    for (i, (xi, yi)) in x.iter_mut().zip(y.iter_mut()).enumerate() {
        let t = TAU * i as f64 / denom;
        for c in coefficients {
            *xi += c.eval_x(t);
            *yi += c.eval_y(t);
        }
    }

    (x, y)
}

/// Generate a normalized Fourier stimulus trajectory.
///
/// `steps` must be at least 2 and `harmonics_count` at least 1. The
/// positive amplitude ranges make a constant axis unreachable in
/// practice, but a degenerate draw still surfaces as
/// [`GazecalError::DegenerateCurve`] instead of NaN output.
pub fn fourier_trajectory(
    steps: usize,
    harmonics_count: usize,
    rng: &mut impl Rng,
) -> GazecalResult<FourierStimulus> {
    if steps < 2 {
        return Err(GazecalError::stimulus(format!(
            "steps must be >= 2, got {steps}"
        )));
    }
    if harmonics_count < 1 {
        return Err(GazecalError::stimulus("harmonics_count must be >= 1"));
    }

    let coefficients = draw_harmonics(harmonics_count, rng);
    tracing::debug!(
        harmonics = coefficients.len(),
        base_amplitude = coefficients[0].amplitude,
        steps,
        "Drew Fourier stimulus coefficients"
    );

    let (x, y) = evaluate_harmonics(&coefficients, steps);
    let trajectory = normalize_unit_square(x, y)?;

    Ok(FourierStimulus {
        trajectory,
        coefficients,
    })
}

/// Re-evaluate a stored coefficient set into a normalized trajectory.
///
/// Replaying the coefficients from a [`StimulusRecord`] reproduces the
/// exact curve instance at any sampling density.
pub fn replay_fourier(
    coefficients: &[HarmonicCoefficient],
    steps: usize,
) -> GazecalResult<Trajectory> {
    if steps < 2 {
        return Err(GazecalError::stimulus(format!(
            "steps must be >= 2, got {steps}"
        )));
    }
    if coefficients.is_empty() {
        return Err(GazecalError::stimulus("coefficient set is empty"));
    }
    let (x, y) = evaluate_harmonics(coefficients, steps);
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
    fn test_scenario_600_steps_4_harmonics() {
        let mut rng = StdRng::seed_from_u64(7);
        let stimulus = fourier_trajectory(600, 4, &mut rng).unwrap();
        let t = &stimulus.trajectory;

        assert_eq!(t.len(), 600);
        assert_unit_range(&t.x);
        assert_unit_range(&t.y);

        // The harmonic sum's derivative is bounded by Σ aₖ·fₖ, and after
        // normalization the sample-to-sample jump stays within a small
        // multiple of the parameter step 2π/steps.
        let max_step = 8.0 * TAU / 600.0;
        for pair in t.x.windows(2) {
            assert!((pair[1] - pair[0]).abs() < max_step);
        }
        for pair in t.y.windows(2) {
            assert!((pair[1] - pair[0]).abs() < max_step);
        }
    }

    #[test]
    fn test_coefficient_policy() {
        let mut rng = StdRng::seed_from_u64(11);
        let coefficients = draw_harmonics(5, &mut rng);

        assert_eq!(coefficients.len(), 5);
        let base = &coefficients[0];
        assert!((0.3..=0.8).contains(&base.amplitude));
        assert_eq!(base.frequency, 1.0);
        assert!((0.0..TAU).contains(&base.phase));

        for (idx, c) in coefficients.iter().enumerate().skip(1) {
            let i = (idx + 1) as f64;
            assert_eq!(c.frequency, i);
            assert!((0.0..TAU).contains(&c.phase));
            // amplitude = base * decay / i² with decay in [4, 7]
            let decay = c.amplitude * i * i / base.amplitude;
            assert!(
                (4.0 - 1e-9..=7.0 + 1e-9).contains(&decay),
                "harmonic {i}: implied decay {decay} out of range"
            );
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = fourier_trajectory(200, 3, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = fourier_trajectory(200, 3, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.coefficients, b.coefficients);
        assert_eq!(a.trajectory, b.trajectory);

        let c = fourier_trajectory(200, 3, &mut StdRng::seed_from_u64(100)).unwrap();
        assert_ne!(a.coefficients, c.coefficients);
    }

    #[test]
    fn test_amplitude_range_boundaries_normalize() {
        // Base amplitude exactly at either boundary of the draw range
        for base in [0.3, 0.8] {
            let coefficients = vec![
                HarmonicCoefficient::new(base, 1.0, 0.4),
                HarmonicCoefficient::new(base * 5.0 / 4.0, 2.0, 2.1),
            ];
            let t = replay_fourier(&coefficients, 300).unwrap();
            assert_unit_range(&t.x);
            assert_unit_range(&t.y);
        }
    }

    #[test]
    fn test_single_harmonic_is_valid() {
        let mut rng = StdRng::seed_from_u64(3);
        let stimulus = fourier_trajectory(50, 1, &mut rng).unwrap();
        assert_eq!(stimulus.coefficients.len(), 1);
        assert_eq!(stimulus.trajectory.len(), 50);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(fourier_trajectory(1, 4, &mut rng).is_err());
        assert!(fourier_trajectory(600, 0, &mut rng).is_err());
        assert!(replay_fourier(&[], 100).is_err());
    }

    #[test]
    fn test_record_round_trip() {
        let mut rng = StdRng::seed_from_u64(21);
        let stimulus = fourier_trajectory(120, 4, &mut rng).unwrap();
        let record = stimulus.to_record();

        let json = gazecal_trajectory_model::serialize_record(&record).unwrap();
        let parsed = gazecal_trajectory_model::parse_record(&json).unwrap();
        assert_eq!(record, parsed);

        // Replaying the stored coefficients reproduces the trajectory
        let replayed = replay_fourier(&stimulus.coefficients, 120).unwrap();
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
                steps in 3usize..500,
                harmonics in 1usize..8,
            ) {
                let mut rng = StdRng::seed_from_u64(seed);
                let stimulus = fourier_trajectory(steps, harmonics, &mut rng).unwrap();
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
