//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for points and tag sets with a fixed timestamp.
//! - [`fixtures`] - Canned vendor payloads.

pub mod domain;
pub mod fixtures;
