//! The frame loop: video in, gaze trajectory out.

use gazecal_common::GazecalResult;
use gazecal_trajectory_model::GazeTrajectory;

use crate::estimator::{EstimatorOutcome, GazeEstimator};
use crate::source::VideoSource;

/// Per-frame accumulator for the three output sequences.
///
/// Lengths stay equal by construction: every frame pushes exactly one
/// entry to each sequence.
#[derive(Debug, Default)]
struct GazeAccumulator {
    x: Vec<f64>,
    y: Vec<f64>,
    blink: Vec<bool>,
    missing: usize,
}

impl GazeAccumulator {
    fn push_estimate(&mut self, x: f64, y: f64, blink: bool) {
        self.x.push(x);
        self.y.push(y);
        self.blink.push(blink);
    }

    /// Sentinel for a frame with no estimate: `(0, 0)` and blink=true,
    /// keeping frame indices aligned with the stimulus trajectory.
    fn push_missing(&mut self) {
        self.missing += 1;
        self.x.push(0.0);
        self.y.push(0.0);
        self.blink.push(true);
    }

    fn frames(&self) -> usize {
        self.x.len()
    }

    fn finish(self) -> GazeTrajectory {
        GazeTrajectory {
            x: self.x,
            y: self.y,
            blink: self.blink,
        }
    }
}

/// Reduce a video to a per-frame gaze trajectory.
///
/// One output entry per frame read, in source order. Frames where the
/// estimator reports [`EstimatorOutcome::NoEstimate`] are imputed, not
/// dropped. A source that is not open yields the explicit zero-frame
/// trajectory. Estimator and decode errors abort extraction and
/// propagate; the source is released on every exit path.
pub fn extract_gaze_trajectory(
    source: &mut dyn VideoSource,
    estimator: &mut dyn GazeEstimator,
) -> GazecalResult<GazeTrajectory> {
    if !source.is_open() {
        tracing::warn!(
            source = source.name(),
            "Video source is not open; returning empty gaze trajectory"
        );
        source.release();
        return Ok(GazeTrajectory::empty());
    }

    let mut acc = GazeAccumulator::default();
    let result = run_frame_loop(source, estimator, &mut acc);
    source.release();

    match result {
        Ok(()) => {
            tracing::info!(
                source = source.name(),
                estimator = estimator.name(),
                frames = acc.frames(),
                missing = acc.missing,
                "Gaze extraction complete"
            );
            Ok(acc.finish())
        }
        Err(e) => {
            tracing::error!(
                source = source.name(),
                frames_read = acc.frames(),
                error = %e,
                "Gaze extraction aborted"
            );
            Err(e)
        }
    }
}

fn run_frame_loop(
    source: &mut dyn VideoSource,
    estimator: &mut dyn GazeEstimator,
    acc: &mut GazeAccumulator,
) -> GazecalResult<()> {
    while let Some(frame) = source.next_frame()? {
        match estimator.process_frame(&frame)? {
            EstimatorOutcome::Estimate(estimate) => {
                acc.push_estimate(
                    estimate.pog.x,
                    estimate.pog.y,
                    estimate.eye_state.is_closed(),
                );
            }
            EstimatorOutcome::NoEstimate => acc.push_missing(),
        }
    }
    Ok(())
}
