//! Inbound (driving) ports: interfaces implemented by adapters that bring
//! metrics into the process.

pub mod source;
