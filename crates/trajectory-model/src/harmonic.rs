//! Fourier harmonic coefficients for stimulus curves.

use serde::{Deserialize, Serialize};

/// One `(amplitude, frequency, phase)` term of a Fourier-sum curve.
///
/// Amplitude is strictly positive; frequency is the harmonic index
/// (`>= 1`); phase lies in `[0, 2π)`. A stimulus curve evaluates the same
/// coefficient set on both axes — cosine for x, sine for y — so a stored
/// list of these records is enough to replay an exact curve instance on
/// another device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicCoefficient {
    /// Term amplitude (pre-normalization curve units).
    pub amplitude: f64,

    /// Angular frequency multiplier (harmonic index).
    pub frequency: f64,

    /// Phase offset in radians, `[0, 2π)`.
    pub phase: f64,
}

impl HarmonicCoefficient {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Evaluate the x-axis contribution of this term at parameter `t`.
    pub fn eval_x(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t + self.phase).cos()
    }

    /// Evaluate the y-axis contribution of this term at parameter `t`.
    pub fn eval_y(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t + self.phase).sin()
    }
}
