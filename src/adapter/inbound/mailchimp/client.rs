//! Mailchimp reports API client.
//!
//! The API host depends on the account's datacenter, which Mailchimp encodes
//! as the trailing token of the API key (`...-us13` -> `us13.api.mailchimp.com`).
//! Requests authenticate with HTTP basic auth: empty user, API key as password.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{ApiError, ReportsResponse};
use super::settings::MailchimpConfig;
use crate::error::{ConfigError, Result};

const REPORTS_ENDPOINT: &str = "/3.0/reports";

static DATACENTER: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new("[a-z]+[0-9]+$").expect("datacenter pattern is valid")
});

/// Extract the datacenter token from the end of an API key.
///
/// Returns the longest trailing run of lowercase letters followed by digits.
#[must_use]
pub fn datacenter(api_key: &str) -> Option<&str> {
    DATACENTER.find(api_key).map(|m| m.as_str())
}

/// Build the reports endpoint for the datacenter named in `api_key`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the key has no datacenter suffix.
pub fn derive_endpoint(api_key: &str) -> Result<Url> {
    let dc = datacenter(api_key).ok_or_else(|| ConfigError::InvalidValue {
        field: "mailchimp.api_key",
        reason: "no datacenter suffix (expected e.g. '-us13')".to_string(),
    })?;
    Ok(Url::parse(&format!(
        "https://{dc}.api.mailchimp.com{REPORTS_ENDPOINT}"
    ))?)
}

/// HTTP client for `GET /3.0/reports`.
///
/// Fully initialized at construction; holds no mutable state.
#[derive(Debug)]
pub struct ChimpApi {
    http: HttpClient,
    endpoint: Url,
    api_key: String,
    debug: bool,
}

impl ChimpApi {
    /// Create a client for the datacenter encoded in `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key has no datacenter suffix.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        Ok(Self {
            http: HttpClient::new(),
            endpoint: derive_endpoint(&api_key)?,
            api_key,
            debug: false,
        })
    }

    /// Create a client from configuration, applying timeout and debug flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the key has no datacenter suffix.
    pub fn from_config(config: &MailchimpConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            endpoint: derive_endpoint(&config.api_key)?,
            api_key: config.api_key.clone(),
            debug: config.debug,
        })
    }

    /// Create a client against an explicit endpoint, bypassing derivation.
    ///
    /// Used for proxies and local test servers.
    #[must_use]
    pub fn with_endpoint(endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint,
            api_key: api_key.into(),
            debug: false,
        }
    }

    /// Enable or disable request/response logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and decode the campaign reports.
    ///
    /// The HTTP status is not used to decide success: an error status is
    /// logged and its body is decoded like any other, which for Mailchimp's
    /// problem-detail bodies yields an envelope with no reports.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::error::Error::Http) on transport
    /// failures and [`Error::Json`](crate::error::Error::Json) if the body
    /// is not a valid reports envelope.
    pub async fn get_reports(&self) -> Result<ReportsResponse> {
        if self.debug {
            info!(url = %self.endpoint, "Request URL");
        }

        let response = self
            .http
            .get(self.endpoint.clone())
            .basic_auth("", Some(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if self.debug {
            info!(body = %String::from_utf8_lossy(&body), "Response body");
        }

        // TODO: surface error statuses as errors once callers can tell an
        // empty account from a rejected key.
        if !status.is_success() {
            let detail = serde_json::from_slice::<ApiError>(&body)
                .map(|problem| problem.to_string())
                .unwrap_or_default();
            warn!(
                status = status.as_u16(),
                detail = %detail,
                "Mailchimp returned an error status"
            );
        }

        let reports: ReportsResponse = serde_json::from_slice(&body)?;
        debug!(
            reports = reports.reports.len(),
            total_items = reports.total_items,
            "Fetched Mailchimp reports"
        );
        Ok(reports)
    }
}
