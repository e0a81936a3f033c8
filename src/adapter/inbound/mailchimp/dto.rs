//! Wire types for the Mailchimp reports API.
//!
//! Every field defaults when absent or `null`, so partial or unexpected
//! bodies decode to zero values rather than failing.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response envelope of `GET /3.0/reports`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportsResponse {
    #[serde(deserialize_with = "null_default")]
    pub reports: Vec<Report>,
    #[serde(deserialize_with = "null_default")]
    pub total_items: i64,
}

/// One campaign report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Report {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub campaign_title: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub emails_sent: i64,
    #[serde(deserialize_with = "null_default")]
    pub abuse_reports: i64,
    #[serde(deserialize_with = "null_default")]
    pub unsubscribed: i64,
    #[serde(deserialize_with = "null_default")]
    pub send_time: String,

    /// Hourly activity. Decoded but not flattened into metrics.
    #[serde(deserialize_with = "null_default")]
    pub timeseries: Vec<TimeSerie>,
    #[serde(deserialize_with = "null_default")]
    pub bounces: Bounces,
    #[serde(deserialize_with = "null_default")]
    pub forwards: Forwards,
    #[serde(deserialize_with = "null_default")]
    pub opens: Opens,
    #[serde(deserialize_with = "null_default")]
    pub clicks: Clicks,
    #[serde(deserialize_with = "null_default")]
    pub facebook_likes: FacebookLikes,
    #[serde(deserialize_with = "null_default")]
    pub industry_stats: IndustryStats,
    #[serde(deserialize_with = "null_default")]
    pub list_stats: ListStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Bounces {
    #[serde(deserialize_with = "null_default")]
    pub hard_bounces: i64,
    #[serde(deserialize_with = "null_default")]
    pub soft_bounces: i64,
    #[serde(deserialize_with = "null_default")]
    pub syntax_errors: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forwards {
    #[serde(deserialize_with = "null_default")]
    pub forwards_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub forwards_opens: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Opens {
    #[serde(deserialize_with = "null_default")]
    pub opens_total: i64,
    #[serde(deserialize_with = "null_default")]
    pub unique_opens: i64,
    #[serde(deserialize_with = "null_default")]
    pub open_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub last_open: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Clicks {
    #[serde(deserialize_with = "null_default")]
    pub clicks_total: i64,
    #[serde(deserialize_with = "null_default")]
    pub unique_clicks: i64,
    #[serde(deserialize_with = "null_default")]
    pub unique_subscriber_clicks: i64,
    #[serde(deserialize_with = "null_default")]
    pub click_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub last_click: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FacebookLikes {
    #[serde(deserialize_with = "null_default")]
    pub recipient_likes: i64,
    #[serde(deserialize_with = "null_default")]
    pub unique_likes: i64,
    #[serde(deserialize_with = "null_default")]
    pub facebook_likes: i64,
}

/// Averages for the account's industry, for comparison.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IndustryStats {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub open_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub click_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub bounce_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub unopen_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub unsub_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub abuse_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListStats {
    #[serde(deserialize_with = "null_default")]
    pub sub_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub unsub_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub open_rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub click_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimeSerie {
    #[serde(deserialize_with = "null_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_default")]
    pub emails_sent: i64,
    #[serde(deserialize_with = "null_default")]
    pub unique_opens: i64,
    #[serde(deserialize_with = "null_default")]
    pub recipients_clicks: i64,
}

/// Problem-detail body Mailchimp returns with error statuses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub status: u16,
    #[serde(deserialize_with = "null_default")]
    pub detail: String,
    #[serde(deserialize_with = "null_default")]
    pub instance: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::fixtures::{SAMPLE_API_ERROR, SAMPLE_REPORTS};

    #[test]
    fn sample_payload_decodes() {
        let response: ReportsResponse = serde_json::from_str(SAMPLE_REPORTS).unwrap();

        assert_eq!(response.total_items, 1);
        assert_eq!(response.reports.len(), 1);

        let report = &response.reports[0];
        assert_eq!(report.id, "42694e9e57");
        assert_eq!(report.campaign_title, "Freddie's Jokes Vol. 1");
        assert_eq!(report.kind, "regular");
        assert_eq!(report.emails_sent, 200);
        assert_eq!(report.unsubscribed, 2);
        assert_eq!(report.bounces.soft_bounces, 2);
        assert_eq!(report.opens.opens_total, 186);
        assert_eq!(report.opens.open_rate, 42.0);
        assert_eq!(report.clicks.unique_clicks, 400);
        assert_eq!(report.facebook_likes.unique_likes, 8);
        assert_eq!(
            report.industry_stats.kind,
            "Social Networks and Online Communities"
        );
        assert_eq!(report.list_stats.unsub_rate, 20.0);
    }

    #[test]
    fn timeseries_is_decoded() {
        let response: ReportsResponse = serde_json::from_str(SAMPLE_REPORTS).unwrap();
        let series = &response.reports[0].timeseries;
        assert_eq!(series.len(), 24);
        assert_eq!(series[0].emails_sent, 198);
        assert_eq!(series[0].timestamp, "2015-09-15T19:00:00+00:00");
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let response: ReportsResponse =
            serde_json::from_str(r#"{"reports": [{"id": "abc"}]}"#).unwrap();
        let report = &response.reports[0];
        assert_eq!(report.id, "abc");
        assert_eq!(report.emails_sent, 0);
        assert_eq!(report.opens.open_rate, 0.0);
        assert!(report.clicks.last_click.is_empty());
        assert_eq!(response.total_items, 0);
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let body = r#"{
            "reports": [{
                "id": "a",
                "campaign_title": null,
                "emails_sent": null,
                "opens": {"opens_total": 3, "open_rate": null, "last_open": null},
                "industry_stats": null,
                "timeseries": null
            }],
            "total_items": null
        }"#;
        let response: ReportsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.total_items, 0);
        let report = &response.reports[0];
        assert_eq!(report.id, "a");
        assert!(report.campaign_title.is_empty());
        assert_eq!(report.emails_sent, 0);
        assert_eq!(report.opens.opens_total, 3);
        assert_eq!(report.opens.open_rate, 0.0);
        assert!(report.opens.last_open.is_empty());
        assert!(report.industry_stats.kind.is_empty());
        assert_eq!(report.industry_stats.abuse_rate, 0.0);
        assert!(report.timeseries.is_empty());
    }

    #[test]
    fn null_reports_list_is_empty() {
        let response: ReportsResponse =
            serde_json::from_str(r#"{"reports": null, "total_items": 0}"#).unwrap();
        assert!(response.reports.is_empty());
    }

    #[test]
    fn error_body_decodes_as_empty_envelope() {
        let response: ReportsResponse = serde_json::from_str(SAMPLE_API_ERROR).unwrap();
        assert!(response.reports.is_empty());
    }

    #[test]
    fn api_error_displays_status_and_detail() {
        let err: ApiError = serde_json::from_str(SAMPLE_API_ERROR).unwrap();
        assert_eq!(err.title, "API Key Invalid");
        assert!(err.to_string().starts_with("401: Your API key may be invalid"));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let result: std::result::Result<ReportsResponse, _> =
            serde_json::from_str(r#"{"reports": "not a list"}"#);
        assert!(result.is_err());
    }
}
