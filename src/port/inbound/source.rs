//! Metric source port for pull adapters.

use async_trait::async_trait;

use crate::error::Result;
use crate::port::outbound::accumulator::Accumulator;

/// Source that fetches metrics from an external API on demand.
///
/// Each [`gather`](Self::gather) call performs one collection cycle and
/// reports every metric to the accumulator. Calls are independent; callers
/// own scheduling, overlap control and retries.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Return the source name for logging.
    fn name(&self) -> &'static str;

    /// One-line description shown by `config sample`.
    fn description(&self) -> &'static str;

    /// TOML snippet documenting the source's settings.
    fn sample_config(&self) -> &'static str;

    /// Run one collection cycle.
    ///
    /// # Errors
    ///
    /// Returns transport or decoding errors from the underlying API call.
    /// Nothing is added to the accumulator when the fetch fails.
    async fn gather(&self, acc: &mut dyn Accumulator) -> Result<()>;
}
