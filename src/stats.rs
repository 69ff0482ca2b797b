//! Motion statistics aggregation.
//!
//! Reduces one or more segments into aggregate distance/time/speed figures.
//! All supplied segments are treated as one logical trace, but no distance
//! or time is attributed across a segment boundary, since a boundary may
//! represent a real discontinuity such as a crew reassignment.

use log::debug;

use crate::error::{Result, TraceError};
use crate::geo_utils::haversine_distance;
use crate::{MotionStatistics, Segment};

/// Aggregate motion statistics over segments.
///
/// For each consecutive pair of updates within a segment, the interval
/// distance and duration are accumulated into the totals; intervals whose
/// speed is at or above `moving_threshold` (inclusive) also count toward
/// the moving totals. Intervals with a non-positive time delta (duplicate
/// samples) contribute nothing and raise no error. Fewer than two updates
/// overall yields all-zero statistics.
///
/// Fails with [`TraceError::InvalidThreshold`] if `moving_threshold` is
/// negative, and propagates [`TraceError::InvalidCoordinate`] from the
/// distance calculation.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use tracemetrics::{
///     calculate_motion_statistics, segment_history, LocationUpdate, VehicleStatus,
/// };
///
/// let updates = vec![
///     LocationUpdate::new("unit-1", Utc.timestamp_opt(0, 0).unwrap(), 0.0, 0.0,
///         VehicleStatus::PatientBound),
///     LocationUpdate::new("unit-1", Utc.timestamp_opt(60, 0).unwrap(), 0.0, 0.01,
///         VehicleStatus::PatientBound),
/// ];
/// let segments = segment_history(&updates).unwrap();
///
/// let stats = calculate_motion_statistics(10.0 / 3.6, &segments).unwrap();
/// assert!(stats.max_speed > 0.0);
/// ```
pub fn calculate_motion_statistics(
    moving_threshold: f64,
    segments: &[Segment],
) -> Result<MotionStatistics> {
    if moving_threshold < 0.0 {
        return Err(TraceError::InvalidThreshold {
            threshold: moving_threshold,
        });
    }

    let mut stats = MotionStatistics::default();

    for segment in segments {
        for pair in segment.updates().windows(2) {
            let dt = (pair[1].timestamp - pair[0].timestamp).num_milliseconds() as f64 / 1000.0;
            if dt <= 0.0 {
                // Duplicate samples are tolerated, not rejected.
                continue;
            }

            let d = haversine_distance(&pair[0].point(), &pair[1].point())?;
            let speed = d / dt;

            stats.total_distance += d;
            stats.total_time += dt;

            if speed >= moving_threshold {
                stats.total_moving_distance += d;
                stats.total_moving_time += dt;
            }

            stats.max_speed = stats.max_speed.max(speed);
        }
    }

    debug!(
        "aggregated {} segments: {:.1} m over {:.1} s, max {:.2} m/s",
        segments.len(),
        stats.total_distance,
        stats.total_time,
        stats.max_speed
    );

    Ok(stats)
}
