//! Stream segmentation.
//!
//! Partitions a time-ordered update stream into maximal runs that are
//! homogeneous in vehicle status and assigned user. The partition is
//! lossless: concatenating all segments' updates, in order, reproduces the
//! input exactly.
//!
//! A boundary is opened only on a status or user change. Large time gaps do
//! not split segments on their own; callers that want gap-based splitting
//! pre-filter the input stream.

use log::debug;
use serde::Serialize;

use crate::error::{Result, TraceError};
use crate::{Bounds, LocationUpdate, VehicleStatus};

/// A maximal run of consecutive updates sharing status and assigned user.
///
/// Segments are non-empty, own their updates, are created only by
/// [`segment_history`], and are never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    updates: Vec<LocationUpdate>,
    status: VehicleStatus,
    user: Option<String>,
    /// Elapsed seconds between first and last update.
    duration: f64,
}

impl Segment {
    /// Build a segment from a non-empty run of updates.
    /// Callers guarantee homogeneity; only the segmenter constructs these.
    fn new(updates: Vec<LocationUpdate>) -> Self {
        let first = updates.first().expect("segment updates must be non-empty");
        let last = updates.last().expect("segment updates must be non-empty");
        let status = first.status;
        let user = first.user.clone();
        let duration = (last.timestamp - first.timestamp).num_milliseconds() as f64 / 1000.0;
        Self {
            updates,
            status,
            user,
            duration,
        }
    }

    /// The updates composing this segment, in input order.
    pub fn updates(&self) -> &[LocationUpdate] {
        &self.updates
    }

    /// Vehicle status shared by every update in this segment.
    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    /// Assigned user shared by every update in this segment, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Elapsed time in seconds between the first and last update.
    /// Zero for a single-update segment.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of updates in this segment (always >= 1).
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Always false; segments are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bounding box of the segment's coordinates, for map-overlay callers.
    pub fn bounds(&self) -> Bounds {
        let points: Vec<_> = self.updates.iter().map(|u| u.point()).collect();
        Bounds::from_points(&points).expect("segment is non-empty")
    }
}

/// Partition a time-ordered update stream into homogeneous segments.
///
/// A new segment starts whenever `status` or `user` differs from the
/// immediately preceding update (transitions to and from "no user"
/// included). An empty input yields an empty output. Fails with
/// [`TraceError::UnsortedInput`] if any timestamp decreases relative to its
/// predecessor; duplicate timestamps are allowed.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use tracemetrics::{segment_history, LocationUpdate, VehicleStatus};
///
/// let updates = vec![
///     LocationUpdate::new("unit-1", Utc.timestamp_opt(0, 0).unwrap(), 0.0, 0.0,
///         VehicleStatus::PatientBound),
///     LocationUpdate::new("unit-1", Utc.timestamp_opt(60, 0).unwrap(), 0.0, 0.01,
///         VehicleStatus::AtPatient),
/// ];
///
/// let segments = segment_history(&updates).unwrap();
/// assert_eq!(segments.len(), 2);
/// ```
pub fn segment_history(updates: &[LocationUpdate]) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut current: Vec<LocationUpdate> = Vec::new();

    for (index, update) in updates.iter().enumerate() {
        if let Some(previous) = current.last() {
            if update.timestamp < previous.timestamp {
                return Err(TraceError::UnsortedInput {
                    index,
                    previous: previous.timestamp,
                    current: update.timestamp,
                });
            }
            if update.status != previous.status || update.user != previous.user {
                segments.push(Segment::new(std::mem::take(&mut current)));
            }
        }
        current.push(update.clone());
    }

    if !current.is_empty() {
        segments.push(Segment::new(current));
    }

    debug!(
        "segmented {} updates into {} segments",
        updates.len(),
        segments.len()
    );

    Ok(segments)
}
