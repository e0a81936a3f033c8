//! Infrastructure bootstrap helpers for adapter wiring.

use tracing::info;

use crate::adapter::inbound::mailchimp::MailChimp;
use crate::adapter::outbound::datadog::Datadog;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::source::MetricSource;
use crate::port::outbound::sink::MetricSink;

/// Build the Datadog sink from the `[datadog]` section.
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] if the section or its API key is
/// absent, or an error if the configured URL is invalid.
pub fn build_sink(config: &Config) -> Result<Datadog> {
    let settings = config
        .datadog
        .as_ref()
        .ok_or(ConfigError::MissingField { field: "datadog" })?;
    if settings.api_key.is_empty() {
        return Err(ConfigError::MissingField {
            field: "datadog.api_key",
        }
        .into());
    }
    let sink = Datadog::from_config(settings)?;
    info!(sink = sink.name(), url = %settings.url, "Sink configured");
    Ok(sink)
}

/// Build the Mailchimp source from the `[mailchimp]` section.
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] if the section or its API key is
/// absent, or an error if the API key names no datacenter.
pub fn build_source(config: &Config) -> Result<MailChimp> {
    let settings = config
        .mailchimp
        .as_ref()
        .ok_or(ConfigError::MissingField { field: "mailchimp" })?;
    if settings.api_key.is_empty() {
        return Err(ConfigError::MissingField {
            field: "mailchimp.api_key",
        }
        .into());
    }
    let source = MailChimp::from_config(settings)?;
    info!(
        source = source.name(),
        endpoint = %source.api().endpoint(),
        "Source configured"
    );
    Ok(source)
}
