//! Datadog sink configuration.

use serde::Deserialize;

/// Series ingestion endpoint used when no URL is configured.
pub const DEFAULT_URL: &str = "https://app.datadoghq.com/api/v1/series";

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "DATADOG_API_KEY";

/// Settings for the Datadog series sink.
#[derive(Debug, Clone, Deserialize)]
pub struct DatadogConfig {
    /// Series endpoint. Any path and query are kept; `api_key` is appended.
    #[serde(default = "default_url")]
    pub url: String,

    /// Datadog API key. Prefer setting `DATADOG_API_KEY` instead.
    #[serde(default)]
    pub api_key: String,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_url() -> String {
    DEFAULT_URL.into()
}

const fn default_timeout_ms() -> u64 {
    5_000
}

impl Default for DatadogConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
