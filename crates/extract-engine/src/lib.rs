//! GazeCal Extract Engine
//!
//! Reduces a recorded eye video to a per-frame gaze trajectory that can
//! be compared against a stimulus trajectory of matching frame count.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            extract_gaze_trajectory             │
//! │  ┌─────────────┐        ┌──────────────────┐  │
//! │  │ VideoSource │─frame─▶│  GazeEstimator   │  │
//! │  └─────────────┘        └────────┬─────────┘  │
//! │                                  │ outcome     │
//! │                                  ▼             │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │ GazeTrajectory (x, y, blink per frame)  │  │
//! │  │ missing frames imputed as (0, 0)/blink  │  │
//! │  └─────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The video decoder and the gaze-estimation model live behind the
//! [`VideoSource`] and [`GazeEstimator`] traits; this crate owns only the
//! frame loop and the missing-data policy. Processing is batch and
//! strictly sequential — one frame at a time until the source is
//! exhausted.

pub mod estimator;
pub mod extractor;
pub mod source;

pub use estimator::*;
pub use extractor::*;
pub use source::*;
