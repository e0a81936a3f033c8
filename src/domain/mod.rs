//! Vendor-agnostic metric types.

pub mod error;
mod point;
mod value;

pub use point::{Point, Tags};
pub use value::FieldValue;
