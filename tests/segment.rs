//! Tests for segment module

use chrono::{DateTime, TimeZone, Utc};
use tracemetrics::{segment_history, LocationUpdate, TraceError, VehicleStatus};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn update(secs: i64, status: VehicleStatus, user: Option<&str>) -> LocationUpdate {
    match user {
        Some(u) => LocationUpdate::with_user("unit-1", at(secs), 32.51, -117.03, status, u),
        None => LocationUpdate::new("unit-1", at(secs), 32.51, -117.03, status),
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    let segments = segment_history(&[]).unwrap();
    assert!(segments.is_empty());
}

#[test]
fn test_single_update_yields_single_segment() {
    let updates = vec![update(0, VehicleStatus::Available, None)];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 1);
    assert_eq!(segments[0].duration(), 0.0);
    assert_eq!(segments[0].status(), VehicleStatus::Available);
    assert_eq!(segments[0].user(), None);
}

#[test]
fn test_homogeneous_stream_yields_one_segment() {
    let updates = vec![
        update(0, VehicleStatus::PatientBound, Some("medic1")),
        update(30, VehicleStatus::PatientBound, Some("medic1")),
        update(60, VehicleStatus::PatientBound, Some("medic1")),
    ];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 3);
    assert_eq!(segments[0].duration(), 60.0);
}

#[test]
fn test_status_change_starts_new_segment() {
    let updates = vec![
        update(0, VehicleStatus::PatientBound, Some("medic1")),
        update(60, VehicleStatus::PatientBound, Some("medic1")),
        update(120, VehicleStatus::AtPatient, Some("medic1")),
    ];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].len(), 2);
    assert_eq!(segments[0].status(), VehicleStatus::PatientBound);
    assert_eq!(segments[1].len(), 1);
    assert_eq!(segments[1].status(), VehicleStatus::AtPatient);
}

#[test]
fn test_user_change_starts_new_segment() {
    let updates = vec![
        update(0, VehicleStatus::Available, Some("medic1")),
        update(60, VehicleStatus::Available, Some("medic2")),
    ];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].user(), Some("medic1"));
    assert_eq!(segments[1].user(), Some("medic2"));
}

#[test]
fn test_user_transition_to_and_from_none_starts_new_segment() {
    let updates = vec![
        update(0, VehicleStatus::Available, Some("medic1")),
        update(60, VehicleStatus::Available, None),
        update(120, VehicleStatus::Available, Some("medic1")),
    ];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].user(), Some("medic1"));
    assert_eq!(segments[1].user(), None);
    assert_eq!(segments[2].user(), Some("medic1"));
}

#[test]
fn test_partition_is_lossless() {
    let updates = vec![
        update(0, VehicleStatus::Available, None),
        update(10, VehicleStatus::PatientBound, Some("medic1")),
        update(20, VehicleStatus::PatientBound, Some("medic1")),
        update(30, VehicleStatus::AtPatient, Some("medic1")),
        update(40, VehicleStatus::HospitalBound, Some("medic2")),
        update(50, VehicleStatus::HospitalBound, Some("medic2")),
        update(60, VehicleStatus::AtHospital, Some("medic2")),
    ];
    let segments = segment_history(&updates).unwrap();

    let concatenated: Vec<LocationUpdate> = segments
        .iter()
        .flat_map(|s| s.updates().iter().cloned())
        .collect();
    assert_eq!(concatenated, updates);
}

#[test]
fn test_segment_homogeneity() {
    let updates = vec![
        update(0, VehicleStatus::Available, None),
        update(10, VehicleStatus::PatientBound, Some("medic1")),
        update(20, VehicleStatus::PatientBound, Some("medic1")),
        update(30, VehicleStatus::PatientBound, Some("medic2")),
        update(40, VehicleStatus::AtPatient, Some("medic2")),
    ];
    let segments = segment_history(&updates).unwrap();

    for segment in &segments {
        for u in segment.updates() {
            assert_eq!(u.status, segment.status());
            assert_eq!(u.user.as_deref(), segment.user());
        }
    }
}

#[test]
fn test_segments_preserve_input_order() {
    let updates = vec![
        update(0, VehicleStatus::Available, None),
        update(10, VehicleStatus::PatientBound, None),
        update(20, VehicleStatus::AtPatient, None),
    ];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].status(), VehicleStatus::Available);
    assert_eq!(segments[1].status(), VehicleStatus::PatientBound);
    assert_eq!(segments[2].status(), VehicleStatus::AtPatient);
}

#[test]
fn test_duplicate_timestamps_allowed() {
    let updates = vec![
        update(0, VehicleStatus::Available, None),
        update(0, VehicleStatus::Available, None),
        update(10, VehicleStatus::Available, None),
    ];
    let segments = segment_history(&updates).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), 3);
}

#[test]
fn test_unsorted_input_fails() {
    let updates = vec![
        update(60, VehicleStatus::Available, None),
        update(0, VehicleStatus::Available, None),
    ];
    let result = segment_history(&updates);
    assert!(matches!(
        result,
        Err(TraceError::UnsortedInput { index: 1, .. })
    ));
}

#[test]
fn test_regression_across_boundary_fails() {
    // The regression coincides with a status change; it must still fail.
    let updates = vec![
        update(60, VehicleStatus::Available, None),
        update(0, VehicleStatus::PatientBound, None),
    ];
    assert!(segment_history(&updates).is_err());
}

#[test]
fn test_segment_bounds() {
    let updates = vec![
        LocationUpdate::new("unit-1", at(0), 32.51, -117.03, VehicleStatus::Available),
        LocationUpdate::new("unit-1", at(60), 32.53, -117.01, VehicleStatus::Available),
    ];
    let segments = segment_history(&updates).unwrap();
    let bounds = segments[0].bounds();
    assert_eq!(bounds.min_lat, 32.51);
    assert_eq!(bounds.max_lat, 32.53);
    assert_eq!(bounds.min_lng, -117.03);
    assert_eq!(bounds.max_lng, -117.01);
}

#[test]
fn test_segment_serializes() {
    let updates = vec![update(0, VehicleStatus::PatientBound, Some("medic1"))];
    let segments = segment_history(&updates).unwrap();
    let json = serde_json::to_value(&segments[0]).unwrap();
    assert_eq!(json["status"], "PB");
    assert_eq!(json["user"], "medic1");
    assert_eq!(json["duration"], 0.0);
}
