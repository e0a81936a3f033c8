//! Mailchimp as a metric source.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::client::ChimpApi;
use super::flatten::flatten;
use super::settings::MailchimpConfig;
use crate::error::Result;
use crate::port::inbound::source::MetricSource;
use crate::port::outbound::accumulator::Accumulator;

const DESCRIPTION: &str = "Gathers metrics from the /reports MailChimp API";

/// Sample `[mailchimp]` section.
pub const SAMPLE_CONFIG: &str = r#"[mailchimp]
# MailChimp API key (or set MAILCHIMP_API_KEY)
api_key = ""
# Log request URL and raw response body
debug = false
# Request timeout in milliseconds
timeout_ms = 5000
"#;

/// Source that turns every campaign report into flat metrics.
#[derive(Debug)]
pub struct MailChimp {
    api: ChimpApi,
}

impl MailChimp {
    #[must_use]
    pub fn new(api: ChimpApi) -> Self {
        Self { api }
    }

    /// Build the source and its API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key has no datacenter suffix.
    pub fn from_config(config: &MailchimpConfig) -> Result<Self> {
        Ok(Self::new(ChimpApi::from_config(config)?))
    }

    #[must_use]
    pub fn api(&self) -> &ChimpApi {
        &self.api
    }
}

#[async_trait]
impl MetricSource for MailChimp {
    fn name(&self) -> &'static str {
        "mailchimp"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn sample_config(&self) -> &'static str {
        SAMPLE_CONFIG
    }

    async fn gather(&self, acc: &mut dyn Accumulator) -> Result<()> {
        let response = self.api.get_reports().await?;
        let now = Utc::now();

        for report in &response.reports {
            flatten(report, now, acc);
        }

        debug!(reports = response.reports.len(), "Gathered Mailchimp reports");
        Ok(())
    }
}
