//! Metricbridge - metric adapters for Datadog and Mailchimp.
//!
//! This crate moves metric points between an internal model and two vendor
//! HTTP APIs: it pushes point batches to the Datadog series API and pulls
//! campaign reports from the Mailchimp reports API, flattening them into
//! tagged points.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - Points, tags and the closed [`domain::FieldValue`] union
//! - **`port`** - [`port::outbound::sink::MetricSink`],
//!   [`port::inbound::source::MetricSource`] and the
//!   [`port::outbound::accumulator::Accumulator`] they emit into
//! - **`adapter`** - Datadog sink, Mailchimp source, in-memory accumulator, CLI
//! - **`infrastructure`** - Configuration, logging and adapter wiring
//!
//! # Features
//!
//! - `testkit` - Shared fixtures for tests
//! - `integration-tests` - Tests that hit the real vendor APIs
//!
//! # Example
//!
//! ```no_run
//! use metricbridge::adapter::outbound::memory::MemoryAccumulator;
//! use metricbridge::adapter::inbound::mailchimp::{ChimpApi, MailChimp};
//! use metricbridge::port::inbound::source::MetricSource;
//!
//! # async fn run() -> metricbridge::error::Result<()> {
//! let source = MailChimp::new(ChimpApi::new("0123456789abcdef-us13")?);
//! let mut acc = MemoryAccumulator::new();
//! source.gather(&mut acc).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
