//! GazeCal Stimulus Engine
//!
//! Synthesizes 2D target trajectories for a subject to visually follow
//! during calibration/validation trials:
//! - **Fourier:** Randomized harmonic sums reproducing the legacy stimulus
//!   shape family, for cross-device comparability
//! - **Spline:** Random interpolating splines, the most diverse motion
//!   family for varied experiment designs
//! - **Normalization:** A composable transform squeezing any raw curve
//!   into the unit square, independently per axis
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! Randomness comes from a caller-owned [`rand::Rng`], so seeded runs are
//! fully deterministic.

pub mod fourier;
pub mod normalize;
pub mod spline;

pub use fourier::{draw_harmonics, fourier_trajectory, replay_fourier, FourierStimulus};
pub use normalize::normalize_unit_square;
pub use spline::{random_spline_trajectory, replay_spline, ParametricSpline, SplineStimulus};
