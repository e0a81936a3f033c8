//! In-memory accumulator.

use chrono::{DateTime, Utc};

use crate::domain::{FieldValue, Point, Tags};
use crate::port::outbound::accumulator::Accumulator;

/// Accumulator that keeps every emission as a [`Point`], in arrival order.
#[derive(Debug, Default)]
pub struct MemoryAccumulator {
    points: Vec<Point>,
}

impl MemoryAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point recorded under `measurement`, if any.
    #[must_use]
    pub fn get(&self, measurement: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.name() == measurement)
    }

    /// Consume the accumulator, returning the recorded points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Accumulator for MemoryAccumulator {
    fn add(&mut self, measurement: &str, value: FieldValue, tags: &Tags, timestamp: DateTime<Utc>) {
        self.points
            .push(Point::new(measurement, value, tags.clone(), timestamp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_arrival_order() {
        let mut acc = MemoryAccumulator::new();
        let now = Utc::now();
        let tags = Tags::new();

        acc.add("a", FieldValue::Int64(1), &tags, now);
        acc.add("b", FieldValue::Int64(2), &tags, now);
        acc.add("a", FieldValue::Int64(3), &tags, now);

        assert_eq!(acc.len(), 3);
        let names: Vec<_> = acc.points().iter().map(Point::name).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
        assert_eq!(acc.get("a").unwrap().value(), &FieldValue::Int64(1));

        let values: Vec<_> = acc.into_points().into_iter().map(|p| p.value().clone()).collect();
        assert_eq!(
            values,
            vec![FieldValue::Int64(1), FieldValue::Int64(2), FieldValue::Int64(3)]
        );
    }

    #[test]
    fn starts_empty() {
        let acc = MemoryAccumulator::new();
        assert!(acc.is_empty());
        assert!(acc.get("missing").is_none());
        assert!(acc.into_points().is_empty());
    }
}
