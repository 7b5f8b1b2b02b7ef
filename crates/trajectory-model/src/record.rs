//! Serializable replay records for downstream transport/storage.
//!
//! A stimulus record captures everything needed to replay an exact curve
//! instance on another device: the generator family, its drawn random
//! parameters, and the normalized trajectory that was shown.

use serde::{Deserialize, Serialize};

use crate::harmonic::HarmonicCoefficient;
use crate::point::Point2D;
use crate::trajectory::Trajectory;

/// Schema version written into new records.
pub const RECORD_SCHEMA_VERSION: &str = "1.0";

/// A stored stimulus trajectory with its generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulusRecord {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Number of samples in the trajectory.
    pub steps: usize,

    /// Generator family and its drawn parameters.
    #[serde(flatten)]
    pub source: StimulusSource,

    /// The normalized trajectory, `[0, 1] × [0, 1]`.
    pub trajectory: Trajectory,
}

/// Which generator produced a stimulus, with enough detail to replay it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "generator", rename_all = "snake_case")]
pub enum StimulusSource {
    /// Fourier-harmonic curve; the coefficient set is shared by both axes.
    Fourier {
        coefficients: Vec<HarmonicCoefficient>,
    },

    /// Random interpolating spline through the given control points.
    Spline { control_points: Vec<Point2D> },
}

impl StimulusRecord {
    /// Create a record stamped with the current wall-clock time.
    pub fn new(source: StimulusSource, trajectory: Trajectory) -> Self {
        Self {
            schema_version: RECORD_SCHEMA_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            steps: trajectory.len(),
            source,
            trajectory,
        }
    }
}

/// Serialize a record to a JSON document.
pub fn serialize_record(record: &StimulusRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Parse a record from a JSON document.
pub fn parse_record(json: &str) -> Result<StimulusRecord, serde_json::Error> {
    serde_json::from_str(json)
}
