//! Field values carried by metric points.
//!
//! A point holds exactly one field. Its value is a closed set of kinds so the
//! numeric coercion used by push adapters is total and exhaustively matched.

use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// Value of a point's single field.
///
/// The numeric variants mirror the widths producers typically emit. `Bool`
/// and `String` exist because report sources emit them (e.g. timestamps of
/// the last open), but they cannot be submitted as a numeric sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Float32(f32),
    Float64(f64),
    Int(isize),
    Int32(i32),
    Int64(i64),
    Bool(bool),
    String(String),
}

impl FieldValue {
    /// Widen a numeric value to `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UndeterminableType`] for `Bool` and `String`
    /// values. Strings are never parsed, even when they look numeric.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Result<f64, DomainError> {
        match self {
            Self::Float32(v) => Ok(f64::from(*v)),
            Self::Float64(v) => Ok(*v),
            Self::Int(v) => Ok(*v as f64),
            Self::Int32(v) => Ok(f64::from(*v)),
            Self::Int64(v) => Ok(*v as f64),
            Self::Bool(_) | Self::String(_) => Err(DomainError::UndeterminableType),
        }
    }

    /// True for the kinds [`to_f64`](Self::to_f64) accepts.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Bool(_) | Self::String(_))
    }

    /// Short name of the value kind, used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Int(_) => "int",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<isize> for FieldValue {
    fn from(v: isize) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}
