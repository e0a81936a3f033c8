//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams adapters plug into:
//!
//! ```text
//!   ┌────────────┐   gather    ┌──────────────┐   add    ┌─────────────┐
//!   │  Mailchimp │ ──────────▶ │ MetricSource │ ───────▶ │ Accumulator │
//!   └────────────┘             └──────────────┘          └─────────────┘
//!
//!   ┌────────────┐   write     ┌──────────────┐   POST   ┌─────────────┐
//!   │   points   │ ──────────▶ │  MetricSink  │ ───────▶ │   Datadog   │
//!   └────────────┘             └──────────────┘          └─────────────┘
//! ```
//!
//! - [`inbound`]: sources that pull metrics from external reporting APIs
//! - [`outbound`]: sinks that push metrics out, and the accumulator sources
//!   feed into

pub mod inbound;
pub mod outbound;
