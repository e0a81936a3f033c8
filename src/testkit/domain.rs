//! Builders for domain primitives used across tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{FieldValue, Point, Tags};

/// Fixed timestamp for test points: 2009-11-10 23:00:00 UTC.
pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Tags carried by every [`test_point`].
pub fn test_tags() -> Tags {
    let mut tags = Tags::new();
    tags.insert("tag1".into(), "value1".into());
    tags
}

/// Create a point named `name` holding `value`, tagged with [`test_tags`]
/// and stamped with [`test_time`].
pub fn test_point(value: impl Into<FieldValue>, name: &str) -> Point {
    Point::new(name, value, test_tags(), test_time())
}

/// A small batch of numeric points, as a collector would hand to a sink.
pub fn mock_batch() -> Vec<Point> {
    let mut host_tags = Tags::new();
    host_tags.insert("host".into(), "server01".into());
    host_tags.insert("region".into(), "us-west".into());

    vec![
        test_point(1.0_f64, "test1"),
        Point::new("cpu.usage", 0.64_f64, host_tags.clone(), test_time()),
        Point::new("mem.free", 1_024_i64, host_tags, test_time()),
    ]
}
