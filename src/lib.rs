//! # Tracemetrics
//!
//! Trajectory processing for vehicle-tracking applications.
//!
//! This library provides:
//! - Great-circle distance calculation between GPS coordinates
//! - Segmentation of a time-ordered update stream into homogeneous segments
//! - Aggregation of segments into motion statistics (distance, time,
//!   moving-vs-idle breakdown, peak speed)
//!
//! All values are SI (meters, seconds, meters/second); display conversion
//! (km, km/h, hours) is the caller's concern.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tracemetrics::{
//!     calculate_motion_statistics, segment_history, LocationUpdate, VehicleStatus,
//!     DEFAULT_MOVING_THRESHOLD,
//! };
//!
//! let updates = vec![
//!     LocationUpdate::new("unit-7", Utc.timestamp_opt(0, 0).unwrap(), 0.0, 0.0,
//!         VehicleStatus::PatientBound),
//!     LocationUpdate::new("unit-7", Utc.timestamp_opt(60, 0).unwrap(), 0.0, 0.01,
//!         VehicleStatus::PatientBound),
//! ];
//!
//! let segments = segment_history(&updates).unwrap();
//! let stats = calculate_motion_statistics(DEFAULT_MOVING_THRESHOLD, &segments).unwrap();
//! assert!(stats.total_distance > 1000.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TraceError};

// Geographic utilities (haversine distance, bounds)
pub mod geo_utils;
pub use geo_utils::haversine_distance;

// Stream segmentation
pub mod segment;
pub use segment::{segment_history, Segment};

// Motion statistics aggregation
pub mod stats;
pub use stats::calculate_motion_statistics;

/// Observed production default for the moving-speed threshold: 10 km/h in m/s.
///
/// The threshold is always an explicit parameter of
/// [`calculate_motion_statistics`]; this constant is a convenience for
/// callers with no deployment-specific tuning.
pub const DEFAULT_MOVING_THRESHOLD: f64 = 10.0 / 3.6;

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude in decimal degrees (WGS-84).
///
/// # Example
/// ```
/// use tracemetrics::GpsPoint;
/// let point = GpsPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box for a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Create bounds from GPS points.
    pub fn from_points(points: &[GpsPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for p in points {
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
            min_lng = min_lng.min(p.longitude);
            max_lng = max_lng.max(p.longitude);
        }

        Some(Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        })
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GpsPoint {
        GpsPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Vehicle operational status.
///
/// Serialized with the two-letter wire codes used by the tracking API
/// (e.g. `"PB"` for patient bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[serde(rename = "UK")]
    Unknown,
    #[serde(rename = "AV")]
    Available,
    #[serde(rename = "OS")]
    OutOfService,
    #[serde(rename = "PB")]
    PatientBound,
    #[serde(rename = "AP")]
    AtPatient,
    #[serde(rename = "HB")]
    HospitalBound,
    #[serde(rename = "AH")]
    AtHospital,
    #[serde(rename = "BB")]
    BaseBound,
    #[serde(rename = "AB")]
    AtBase,
    #[serde(rename = "WB")]
    WaypointBound,
    #[serde(rename = "AW")]
    AtWaypoint,
}

impl VehicleStatus {
    /// Two-letter wire code.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Unknown => "UK",
            VehicleStatus::Available => "AV",
            VehicleStatus::OutOfService => "OS",
            VehicleStatus::PatientBound => "PB",
            VehicleStatus::AtPatient => "AP",
            VehicleStatus::HospitalBound => "HB",
            VehicleStatus::AtHospital => "AH",
            VehicleStatus::BaseBound => "BB",
            VehicleStatus::AtBase => "AB",
            VehicleStatus::WaypointBound => "WB",
            VehicleStatus::AtWaypoint => "AW",
        }
    }

    /// Human-readable label.
    pub fn description(&self) -> &'static str {
        match self {
            VehicleStatus::Unknown => "Unknown",
            VehicleStatus::Available => "Available",
            VehicleStatus::OutOfService => "Out of service",
            VehicleStatus::PatientBound => "Patient bound",
            VehicleStatus::AtPatient => "At patient",
            VehicleStatus::HospitalBound => "Hospital bound",
            VehicleStatus::AtHospital => "At hospital",
            VehicleStatus::BaseBound => "Base bound",
            VehicleStatus::AtBase => "At base",
            VehicleStatus::WaypointBound => "Waypoint bound",
            VehicleStatus::AtWaypoint => "At waypoint",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = ();

    /// Accepts either the wire code or the human-readable label.
    /// Unrecognized input maps to `Unknown`, matching the model default.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let status = match s.to_uppercase().as_str() {
            "AV" | "AVAILABLE" => VehicleStatus::Available,
            "OS" | "OUT OF SERVICE" => VehicleStatus::OutOfService,
            "PB" | "PATIENT BOUND" => VehicleStatus::PatientBound,
            "AP" | "AT PATIENT" => VehicleStatus::AtPatient,
            "HB" | "HOSPITAL BOUND" => VehicleStatus::HospitalBound,
            "AH" | "AT HOSPITAL" => VehicleStatus::AtHospital,
            "BB" | "BASE BOUND" => VehicleStatus::BaseBound,
            "AB" | "AT BASE" => VehicleStatus::AtBase,
            "WB" | "WAYPOINT BOUND" => VehicleStatus::WaypointBound,
            "AW" | "AT WAYPOINT" => VehicleStatus::AtWaypoint,
            _ => VehicleStatus::Unknown,
        };
        Ok(status)
    }
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus::Unknown
    }
}

/// One timestamped location/status sample for a tracked vehicle.
///
/// Immutable once constructed. Streams handed to the segmenter must be
/// sorted ascending by `timestamp` (duplicates allowed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    /// Opaque vehicle identifier.
    #[serde(alias = "ambulance_id")]
    pub vehicle_id: String,
    /// ISO-8601 on the wire.
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub status: VehicleStatus,
    /// Operator/crew associated with this update, if any.
    #[serde(default, alias = "updated_by_username")]
    pub user: Option<String>,
}

impl LocationUpdate {
    /// Create a new update with no associated user.
    pub fn new(
        vehicle_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        status: VehicleStatus,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            timestamp,
            latitude,
            longitude,
            status,
            user: None,
        }
    }

    /// Create a new update associated with a user.
    pub fn with_user(
        vehicle_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        status: VehicleStatus,
        user: impl Into<String>,
    ) -> Self {
        Self {
            user: Some(user.into()),
            ..Self::new(vehicle_id, timestamp, latitude, longitude, status)
        }
    }

    /// The coordinate of this update.
    pub fn point(&self) -> GpsPoint {
        GpsPoint::new(self.latitude, self.longitude)
    }
}

/// Aggregate motion statistics over a set of segments.
///
/// All fields are SI: meters, seconds, meters/second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionStatistics {
    /// Distance accumulated over all intervals.
    pub total_distance: f64,
    /// Time accumulated over all intervals.
    pub total_time: f64,
    /// Distance accumulated over intervals at or above the moving threshold.
    pub total_moving_distance: f64,
    /// Time accumulated over intervals at or above the moving threshold.
    pub total_moving_time: f64,
    /// Peak instantaneous speed over any interval.
    pub max_speed: f64,
}

impl MotionStatistics {
    /// Average speed over the whole trace, 0 when no time elapsed.
    pub fn avg_speed(&self) -> f64 {
        if self.total_time > 0.0 {
            self.total_distance / self.total_time
        } else {
            0.0
        }
    }

    /// Average speed over moving intervals only, 0 when none.
    pub fn avg_moving_speed(&self) -> f64 {
        if self.total_moving_time > 0.0 {
            self.total_moving_distance / self.total_moving_time
        } else {
            0.0
        }
    }
}
