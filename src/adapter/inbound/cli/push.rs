//! Handler for the `push` command.
//!
//! Input is JSON lines, one point per line:
//!
//! ```text
//! {"name": "cpu", "value": 0.5, "tags": {"host": "a"}, "timestamp": "2009-11-10T23:00:00Z"}
//! ```
//!
//! `tags` and `timestamp` are optional; a missing timestamp means now.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::domain::{FieldValue, Point, Tags};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::build_sink;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::sink::MetricSink;

#[derive(Debug, Deserialize)]
struct PointRecord {
    name: String,
    value: serde_json::Value,
    #[serde(default)]
    tags: Tags,
    timestamp: Option<DateTime<Utc>>,
}

impl PointRecord {
    fn into_point(self, line: usize) -> Result<Point> {
        let value = match &self.value {
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::String(s) => FieldValue::String(s.clone()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int64(i),
                None => FieldValue::Float64(n.as_f64().unwrap_or(f64::NAN)),
            },
            other => {
                return Err(Error::Parse(format!(
                    "line {line}: unsupported value {other}"
                )))
            }
        };
        let timestamp = self.timestamp.unwrap_or_else(Utc::now);
        Point::try_new(self.name, value, self.tags, timestamp)
            .map_err(|e| Error::Parse(format!("line {line}: {e}")))
    }
}

/// Parse JSON lines into points. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`Error::Parse`] naming the first bad line.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: PointRecord = serde_json::from_str(&line)
            .map_err(|e| Error::Parse(format!("line {}: {e}", idx + 1)))?;
        points.push(record.into_point(idx + 1)?);
    }
    Ok(points)
}

/// Execute `push`: send every point in `input` as one batch.
pub async fn execute(config_path: &Path, input: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    config.init_logging();

    let points = if input == Path::new("-") {
        read_points(io::stdin().lock())?
    } else {
        read_points(BufReader::new(File::open(input)?))?
    };

    let sink = build_sink(&config)?;
    if output::verbosity() > 0 {
        output::field("Sink", sink.description());
        output::field("Points", points.len());
    }
    sink.connect().await?;
    let written = sink.write(&points).await;
    sink.close().await?;
    written?;

    info!(sink = sink.name(), points = points.len(), "Push complete");
    output::success(&format!("Sent {} points to {}", points.len(), sink.name()));
    Ok(())
}
