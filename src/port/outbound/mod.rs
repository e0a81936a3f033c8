//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod accumulator;
pub mod sink;
