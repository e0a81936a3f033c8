//! Mailchimp source configuration.

use serde::Deserialize;

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "MAILCHIMP_API_KEY";

/// Settings for the Mailchimp reports source.
#[derive(Debug, Clone, Deserialize)]
pub struct MailchimpConfig {
    /// Mailchimp API key, ending in the datacenter token (e.g. `-us13`).
    /// Prefer setting `MAILCHIMP_API_KEY` instead.
    #[serde(default)]
    pub api_key: String,

    /// Log the request URL and raw response body of every fetch.
    #[serde(default)]
    pub debug: bool,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    5_000
}

impl Default for MailchimpConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            debug: false,
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_uses_defaults() {
        let config: MailchimpConfig = toml::from_str("").unwrap();
        assert!(config.api_key.is_empty());
        assert!(!config.debug);
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn debug_flag_is_read() {
        let config: MailchimpConfig = toml::from_str("api_key = \"k-us1\"\ndebug = true").unwrap();
        assert_eq!(config.api_key, "k-us1");
        assert!(config.debug);
    }
}
