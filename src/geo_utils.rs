//! Geographic utility functions.
//!
//! Great-circle distance on a spherical Earth model. This is the leaf
//! dependency of both the segmenter (segment bounds) and the statistics
//! aggregator (interval distances), and is deterministic across hosts.

use crate::error::{Result, TraceError};
use crate::GpsPoint;

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the haversine distance between two points in meters.
///
/// Symmetric, non-negative, and exactly 0 for identical points. Fails with
/// [`TraceError::InvalidCoordinate`] if either point is outside the valid
/// latitude/longitude ranges or non-finite.
///
/// # Example
/// ```
/// use tracemetrics::{haversine_distance, GpsPoint};
///
/// let london = GpsPoint::new(51.5074, -0.1278);
/// let paris = GpsPoint::new(48.8566, 2.3522);
/// let dist = haversine_distance(&london, &paris).unwrap();
/// assert!((dist - 343_560.0).abs() < 5_000.0);
/// ```
pub fn haversine_distance(p1: &GpsPoint, p2: &GpsPoint) -> Result<f64> {
    validate(p1)?;
    validate(p2)?;

    let phi1 = p1.latitude.to_radians();
    let phi2 = p2.latitude.to_radians();
    let delta_phi = (p2.latitude - p1.latitude).to_radians();
    let delta_lambda = (p2.longitude - p1.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(EARTH_RADIUS_M * c)
}

fn validate(p: &GpsPoint) -> Result<()> {
    if p.is_valid() {
        Ok(())
    } else {
        Err(TraceError::InvalidCoordinate {
            latitude: p.latitude,
            longitude: p.longitude,
        })
    }
}
