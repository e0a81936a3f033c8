//! Wire types for the Datadog series API.

use serde::{Deserialize, Serialize};

/// Request envelope: `{ "series": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub series: Vec<Series>,
}

/// One named metric with its samples and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub metric: String,
    pub points: Vec<DataPoint>,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: MetricType,
}

/// Sample encoded as `[unix_seconds, value]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint(pub f64, pub f64);

impl DataPoint {
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.1
    }
}

/// Metric type marker. Only gauges are submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    #[default]
    Gauge,
}
