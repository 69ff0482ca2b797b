//! Tests for error module

use chrono::{TimeZone, Utc};
use tracemetrics::TraceError;

#[test]
fn test_invalid_coordinate_display() {
    let err = TraceError::InvalidCoordinate {
        latitude: 91.5,
        longitude: 0.0,
    };
    assert!(err.to_string().contains("91.5"));
    assert!(err.to_string().contains("invalid coordinate"));
}

#[test]
fn test_unsorted_input_display() {
    let err = TraceError::UnsortedInput {
        index: 3,
        previous: Utc.timestamp_opt(120, 0).unwrap(),
        current: Utc.timestamp_opt(60, 0).unwrap(),
    };
    let msg = err.to_string();
    assert!(msg.contains("unsorted input"));
    assert!(msg.contains("update 3"));
}

#[test]
fn test_invalid_threshold_display() {
    let err = TraceError::InvalidThreshold { threshold: -2.5 };
    assert!(err.to_string().contains("-2.5"));
    assert!(err.to_string().contains("must be >= 0"));
}
