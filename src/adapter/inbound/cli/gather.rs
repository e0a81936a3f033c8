//! Handler for the `gather` command.

use std::path::Path;

use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::memory::MemoryAccumulator;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_source;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::source::MetricSource;

/// Execute `gather`: fetch reports once and print every metric.
pub async fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();

    let source = build_source(&config)?;
    if output::verbosity() > 0 {
        output::field("Source", source.description());
        output::field("Endpoint", source.api().endpoint());
    }
    let mut acc = MemoryAccumulator::new();
    source.gather(&mut acc).await?;
    let points = acc.into_points();
    info!(source = source.name(), metrics = points.len(), "Gather complete");

    output::section("Metrics");
    if points.is_empty() {
        output::warning("No reports returned");
        return Ok(());
    }
    for point in &points {
        output::metric(point);
    }
    output::field("Total", points.len());
    Ok(())
}
