//! Internal metric point.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::DomainError;
use super::value::FieldValue;

/// Tag set attached to a point.
///
/// Ordered so tag rendering is stable for a given input.
pub type Tags = BTreeMap<String, String>;

/// A single named sample with one field value, tags and a UTC timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    name: String,
    value: FieldValue,
    tags: Tags,
    timestamp: DateTime<Utc>,
}

impl Point {
    /// Create a point without validating the name.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        tags: Tags,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            tags,
            timestamp,
        }
    }

    /// Create a point, rejecting an empty name.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyName`] if `name` is empty.
    pub fn try_new(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        tags: Tags,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self::new(name, value, tags, timestamp))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    #[must_use]
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accessors_return_constructor_values() {
        let ts = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
        let mut tags = Tags::new();
        tags.insert("host".into(), "a".into());

        let point = Point::new("cpu", 1.5_f64, tags.clone(), ts);

        assert_eq!(point.name(), "cpu");
        assert_eq!(point.value(), &FieldValue::Float64(1.5));
        assert_eq!(point.tags(), &tags);
        assert_eq!(point.timestamp(), ts);
    }

    #[test]
    fn try_new_rejects_empty_name() {
        let result = Point::try_new("", 1_i64, Tags::new(), Utc::now());
        assert_eq!(result.unwrap_err(), DomainError::EmptyName);
    }
}
