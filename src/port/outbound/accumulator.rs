//! Accumulator port.
//!
//! The collector that sources hand their flattened metrics to.

use chrono::{DateTime, Utc};

use crate::domain::{FieldValue, Tags};

/// Receiver of flattened metric emissions.
///
/// Sources call [`add`](Self::add) once per metric. Implementations decide
/// whether to buffer, forward or drop; they cannot fail the caller.
pub trait Accumulator: Send {
    /// Record one metric sample.
    fn add(&mut self, measurement: &str, value: FieldValue, tags: &Tags, timestamp: DateTime<Utc>);
}
