//! Datadog series API client.
//!
//! Converts internal points to gauge series and submits them in a single
//! POST. The API key travels as the `api_key` query parameter, which is how
//! the series endpoint authenticates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use super::dto::{DataPoint, MetricType, Series, TimeSeries};
use super::settings::DatadogConfig;
use crate::domain::error::DomainError;
use crate::domain::{Point, Tags};
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::sink::MetricSink;

const DESCRIPTION: &str = "Configuration for Datadog API to send metrics to.";

/// Sample `[datadog]` section.
pub const SAMPLE_CONFIG: &str = r#"[datadog]
# Datadog API key (or set DATADOG_API_KEY)
api_key = ""
# Series endpoint
url = "https://app.datadoghq.com/api/v1/series"
# Request timeout in milliseconds
timeout_ms = 5000
"#;

/// Push adapter for the Datadog series API.
///
/// The HTTP client is built once and reused for every write.
#[derive(Debug)]
pub struct Datadog {
    http: HttpClient,
    url: Url,
    api_key: String,
}

impl Datadog {
    /// Create a sink for `url` with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` does not parse.
    pub fn new(url: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            url: Url::parse(url)?,
            api_key: api_key.into(),
        })
    }

    /// Create a sink from configuration, applying the request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL does not parse.
    pub fn from_config(config: &DatadogConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            url: Url::parse(&config.url)?,
            api_key: config.api_key.clone(),
        })
    }

    /// Target URL with the API key appended as the `api_key` query parameter.
    ///
    /// Path and any existing query parameters of the configured URL are kept.
    /// The URL is normalized on parse, so a bare host gains a trailing `/`:
    /// `http://test.datadog.com` becomes `http://test.datadog.com/?api_key=...`.
    #[must_use]
    pub fn authenticated_url(&self) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        url
    }
}

/// Render tags as `key:value` strings, one per entry.
#[must_use]
pub fn build_tags(tags: &Tags) -> Vec<String> {
    tags.iter().map(|(k, v)| format!("{k}:{v}")).collect()
}

/// Convert a point's timestamp and field value to a vendor sample.
///
/// # Errors
///
/// Returns [`DomainError::UndeterminableType`] if the field is not numeric.
#[allow(clippy::cast_precision_loss)]
pub fn build_point(point: &Point) -> std::result::Result<DataPoint, DomainError> {
    let value = point.value().to_f64()?;
    Ok(DataPoint(point.timestamp().timestamp() as f64, value))
}

/// Convert a whole batch into one request envelope.
///
/// # Errors
///
/// Fails on the first point whose value cannot be converted; no partial
/// envelope is returned.
pub fn build_series(points: &[Point]) -> Result<TimeSeries> {
    let series = points
        .iter()
        .map(|point| {
            let sample = build_point(point).map_err(|err| {
                warn!(
                    metric = point.name(),
                    kind = point.value().kind(),
                    "Point has no numeric value"
                );
                err
            })?;
            Ok(Series {
                metric: point.name().to_string(),
                points: vec![sample],
                tags: build_tags(point.tags()),
                kind: MetricType::Gauge,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TimeSeries { series })
}

#[async_trait]
impl MetricSink for Datadog {
    fn name(&self) -> &'static str {
        "datadog"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn sample_config(&self) -> &'static str {
        SAMPLE_CONFIG
    }

    async fn connect(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingField {
                field: "datadog.api_key",
            }
            .into());
        }
        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "datadog.url",
                reason: format!("unsupported scheme '{}'", self.url.scheme()),
            }
            .into());
        }
        Ok(())
    }

    async fn write(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            debug!("No points to write");
            return Ok(());
        }

        let body = build_series(points)?;

        let response = self
            .http
            .post(self.authenticated_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Datadog rejected series");
            return Err(Error::BadStatus(status.as_u16()));
        }

        debug!(count = body.series.len(), "Posted series to Datadog");
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
