//! Metric sink port for push adapters.

use async_trait::async_trait;

use crate::domain::Point;
use crate::error::Result;

/// Destination that accepts batches of internal points.
///
/// Implementations are built fully at construction and hold no mutable
/// state, so one instance can be shared across tasks.
///
/// # Errors
///
/// [`write`](Self::write) fails as a whole: either every point in the batch
/// was accepted by the vendor or the caller gets an error. Implementations
/// never retry internally.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Return the sink name for logging.
    fn name(&self) -> &'static str;

    /// One-line description shown by `config sample`.
    fn description(&self) -> &'static str;

    /// TOML snippet documenting the sink's settings.
    fn sample_config(&self) -> &'static str;

    /// Check that the sink is configured well enough to send.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if required settings are missing.
    async fn connect(&self) -> Result<()>;

    /// Submit a batch of points.
    ///
    /// # Errors
    ///
    /// Returns an error if any point cannot be converted, the request fails
    /// in transport, or the vendor answers with a non-success status.
    async fn write(&self, points: &[Point]) -> Result<()>;

    /// Release resources held by the sink.
    ///
    /// # Errors
    ///
    /// Implementations without resources always succeed.
    async fn close(&self) -> Result<()>;
}
