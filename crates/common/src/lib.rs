//! GazeCal Common Utilities
//!
//! Shared infrastructure for all GazeCal crates:
//! - Error types and result aliases
//! - Frame timebase utilities for stimulus/video alignment
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod logging;
pub mod timebase;

pub use config::*;
pub use error::*;
pub use timebase::*;
