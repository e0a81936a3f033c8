//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; API keys may be supplied through
//! `DATADOG_API_KEY` and `MAILCHIMP_API_KEY` instead of the file.
//!
//! # Example
//!
//! ```no_run
//! use metricbridge::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::inbound::mailchimp::client::datacenter;
use crate::adapter::inbound::mailchimp::settings::{self as mailchimp, MailchimpConfig};
use crate::adapter::outbound::datadog::settings::{self as datadog, DatadogConfig};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// A missing adapter section means that adapter is not configured; commands
/// that need it fail with a missing-field error.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Datadog push sink settings.
    #[serde(default)]
    pub datadog: Option<DatadogConfig>,

    /// Mailchimp reports source settings.
    #[serde(default)]
    pub mailchimp: Option<MailchimpConfig>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// API keys from the environment replace those in the file for sections
    /// that are present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a Mailchimp key without datacenter)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Replace API keys with values from `lookup` (normally the environment).
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(dd) = self.datadog.as_mut() {
            if let Some(key) = lookup(datadog::API_KEY_ENV) {
                dd.api_key = key;
            }
        }
        if let Some(mc) = self.mailchimp.as_mut() {
            if let Some(key) = lookup(mailchimp::API_KEY_ENV) {
                mc.api_key = key;
            }
        }
    }

    /// Validate configuration values.
    ///
    /// API keys may still be empty here: a section is only required to hold
    /// a key once a command builds that adapter. A key that is present must
    /// be well formed.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<()> {
        if let Some(dd) = &self.datadog {
            validate_datadog(dd)?;
        }
        if let Some(mc) = &self.mailchimp {
            validate_mailchimp(mc)?;
        }
        Ok(())
    }
}

fn validate_datadog(config: &DatadogConfig) -> Result<()> {
    let url = Url::parse(&config.url).map_err(|e| ConfigError::InvalidValue {
        field: "datadog.url",
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "datadog.url",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    if config.timeout_ms == 0 {
        return Err(ConfigError::InvalidValue {
            field: "datadog.timeout_ms",
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_mailchimp(config: &MailchimpConfig) -> Result<()> {
    if !config.api_key.is_empty() && datacenter(&config.api_key).is_none() {
        return Err(ConfigError::InvalidValue {
            field: "mailchimp.api_key",
            reason: "no datacenter suffix (expected e.g. '-us13')".to_string(),
        }
        .into());
    }
    if config.timeout_ms == 0 {
        return Err(ConfigError::InvalidValue {
            field: "mailchimp.timeout_ms",
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}
