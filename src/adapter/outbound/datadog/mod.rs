//! Datadog series push adapter.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::{build_point, build_series, build_tags, Datadog};
pub use settings::DatadogConfig;
