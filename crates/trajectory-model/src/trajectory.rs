//! Trajectory sequences: stimulus paths and measured gaze paths.

use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// Errors raised when assembling trajectory sequences.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Sequence length mismatch: x={x_len}, y={y_len}, blink={blink_len}")]
    LengthMismatch {
        x_len: usize,
        y_len: usize,
        blink_len: usize,
    },
}

/// An ordered sequence of 2D samples.
///
/// Sample index corresponds to synthesis step (stimulus) or video frame
/// number (gaze). `x` and `y` always have equal length; trajectories are
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Per-sample x coordinates.
    pub x: Vec<f64>,

    /// Per-sample y coordinates.
    pub y: Vec<f64>,
}

impl Trajectory {
    /// Create a trajectory, validating that both sequences have equal length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ModelError> {
        if x.len() != y.len() {
            return Err(ModelError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
                blink_len: 0,
            });
        }
        Ok(Self { x, y })
    }

    /// An empty trajectory (zero samples).
    pub fn empty() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trajectory has no samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The sample at `index`, if in range.
    pub fn point(&self, index: usize) -> Option<Point2D> {
        if index >= self.len() {
            return None;
        }
        Some(Point2D::new(self.x[index], self.y[index]))
    }

    /// Iterate samples as points.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
    }
}

/// A per-frame gaze trajectory: point-of-gaze samples plus blink flags.
///
/// `blink[i]` is true iff the eye was classified closed for frame `i` or
/// no estimate was produced for that frame. Length always equals the
/// number of frames read from the source video — missing frames are
/// imputed, never dropped, so frame indices stay aligned with a stimulus
/// trajectory of matching duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazeTrajectory {
    /// Per-frame point-of-gaze x, `0.0` imputed where no estimate existed.
    pub x: Vec<f64>,

    /// Per-frame point-of-gaze y, `0.0` imputed where no estimate existed.
    pub y: Vec<f64>,

    /// Per-frame unreliability flag: closed eye or missing estimate.
    pub blink: Vec<bool>,
}

impl GazeTrajectory {
    /// Create a gaze trajectory, validating that all three sequences have
    /// equal length.
    pub fn new(x: Vec<f64>, y: Vec<f64>, blink: Vec<bool>) -> Result<Self, ModelError> {
        if x.len() != y.len() || x.len() != blink.len() {
            return Err(ModelError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
                blink_len: blink.len(),
            });
        }
        Ok(Self { x, y, blink })
    }

    /// An empty gaze trajectory (zero frames).
    pub fn empty() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            blink: Vec::new(),
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trajectory has no frames.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of frames flagged unreliable (blink or missing estimate).
    pub fn blink_count(&self) -> usize {
        self.blink.iter().filter(|&&b| b).count()
    }

    /// Fraction of frames flagged unreliable, in `[0, 1]`.
    pub fn blink_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.blink_count() as f64 / self.len() as f64
    }

    /// The sample at `index`, if in range.
    pub fn point(&self, index: usize) -> Option<Point2D> {
        if index >= self.len() {
            return None;
        }
        Some(Point2D::new(self.x[index], self.y[index]))
    }

    /// Borrow the coordinate sequences as a plain trajectory for
    /// comparison against a stimulus.
    pub fn as_trajectory(&self) -> Trajectory {
        Trajectory {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }
}
