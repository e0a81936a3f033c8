//! Domain errors for metric points.
//!
//! # Examples
//!
//! ```
//! use metricbridge::domain::error::DomainError;
//! use metricbridge::domain::FieldValue;
//!
//! let result = FieldValue::from("11234.5").to_f64();
//! assert!(matches!(result, Err(DomainError::UndeterminableType)));
//! ```

use thiserror::Error;

/// Errors raised when a point cannot be represented in a vendor format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The field value is not one of the numeric kinds.
    #[error("unable to extract value from Fields, undeterminable type")]
    UndeterminableType,

    /// Points need a metric name to be addressable by the vendor.
    #[error("metric name cannot be empty")]
    EmptyName,
}
