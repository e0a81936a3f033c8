//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::mailchimp::source::SAMPLE_CONFIG as MAILCHIMP_SAMPLE;
use crate::adapter::outbound::datadog::client::SAMPLE_CONFIG as DATADOG_SAMPLE;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your API keys", path.display()));
    output::note(&format!(
        "2. Run: metricbridge config validate -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Configuration Valid");
    output::field("Path", path.display());
    output::field("Datadog", enabled(config.datadog.is_some()));
    output::field("Mailchimp", enabled(config.mailchimp.is_some()));
    if config.datadog.is_none() && config.mailchimp.is_none() {
        output::warning("No adapter configured");
    }
    if config.datadog.as_ref().is_some_and(|dd| dd.api_key.is_empty()) {
        output::warning("Datadog api_key not set (set DATADOG_API_KEY)");
    }
    if config.mailchimp.as_ref().is_some_and(|mc| mc.api_key.is_empty()) {
        output::warning("Mailchimp api_key not set (set MAILCHIMP_API_KEY)");
    }
    Ok(())
}

/// Execute `config sample`.
pub fn execute_sample() {
    output::lines(DATADOG_SAMPLE);
    output::lines(MAILCHIMP_SAMPLE);
}

fn enabled(on: bool) -> &'static str {
    if on {
        "enabled"
    } else {
        "disabled"
    }
}
