//! Outbound adapters (driven side).

pub mod datadog;
pub mod memory;
