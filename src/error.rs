//! Unified error handling for trajectory processing.
//!
//! All failures are local and synchronous, raised at the point of
//! detection. The library never repairs bad input (clamping coordinates or
//! re-sorting streams would silently corrupt the accumulated totals).

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during trajectory processing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite coordinate.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A timestamp in a segmenter input stream regressed relative to its
    /// predecessor.
    #[error("unsorted input: update {index} at {current} precedes {previous}")]
    UnsortedInput {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    /// Negative moving-speed threshold.
    #[error("invalid moving threshold: {threshold} m/s (must be >= 0)")]
    InvalidThreshold { threshold: f64 },
}

/// Result type alias using [`TraceError`].
pub type Result<T> = std::result::Result<T, TraceError>;
