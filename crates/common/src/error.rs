//! Error types shared across GazeCal crates.

/// Top-level error type for GazeCal operations.
#[derive(Debug, thiserror::Error)]
pub enum GazecalError {
    /// A curve axis has zero range after offsetting, so it cannot be
    /// normalized into the unit square.
    #[error("Degenerate curve: {message}")]
    DegenerateCurve { message: String },

    /// Invalid stimulus generator parameters.
    #[error("Stimulus error: {message}")]
    Stimulus { message: String },

    /// The video source could not be opened or failed to decode a frame.
    #[error("Video source error: {message}")]
    Source { message: String },

    /// Gaze extraction failed for a reason other than a per-frame miss.
    #[error("Extraction error: {message}")]
    Extraction { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using GazecalError.
pub type GazecalResult<T> = Result<T, GazecalError>;

impl GazecalError {
    pub fn degenerate_curve(msg: impl Into<String>) -> Self {
        Self::DegenerateCurve {
            message: msg.into(),
        }
    }

    pub fn stimulus(msg: impl Into<String>) -> Self {
        Self::Stimulus {
            message: msg.into(),
        }
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source {
            message: msg.into(),
        }
    }

    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
