//! Gaze estimator seam.
//!
//! The estimator is an external model that turns one image frame into a
//! point-of-gaze estimate and an eye-state classification. Its status
//! codes and detection metadata stay on its side of the seam — this
//! engine consumes only the two-case outcome below, so the
//! missing-frame branch cannot be forgotten at a call site.

use serde::{Deserialize, Serialize};

use gazecal_common::GazecalResult;
use gazecal_trajectory_model::Point2D;

use crate::source::Frame;

/// Eye-state classification reported by an estimator.
///
/// The estimator vocabulary is open-ended; anything that is not
/// explicitly "closed" maps to `Open` or `Unknown` and does not set the
/// blink flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeState {
    Open,
    Closed,
    Unknown,
}

impl EyeState {
    /// Whether this state sets the blink flag.
    pub fn is_closed(&self) -> bool {
        matches!(self, EyeState::Closed)
    }
}

/// A per-frame gaze estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeEstimate {
    /// Point of gaze, already screen-normalized to `[0, 1] × [0, 1]` by
    /// the estimator's own convention. Not re-normalized here.
    pub pog: Point2D,

    /// Eye-state classification for this frame.
    pub eye_state: EyeState,
}

/// Outcome of processing one frame.
///
/// `NoEstimate` (no face found, detection failure) is a normal,
/// expected data point — never an error. Estimator failures that should
/// abort extraction are returned as `Err` from
/// [`GazeEstimator::process_frame`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimatorOutcome {
    /// The estimator produced a usable gaze estimate.
    Estimate(GazeEstimate),

    /// No estimate for this frame; the extractor imputes a sentinel.
    NoEstimate,
}

/// Trait for per-frame gaze estimation models.
pub trait GazeEstimator {
    /// Analyze a single frame.
    fn process_frame(&mut self, frame: &Frame) -> GazecalResult<EstimatorOutcome>;

    /// Estimator name for logging.
    fn name(&self) -> &str;
}
