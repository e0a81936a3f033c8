//! Canned vendor payloads.

/// Mailchimp `/3.0/reports` response with one campaign report.
///
/// The report has id `42694e9e57`, title `Freddie's Jokes Vol. 1` and
/// `emails_sent: 200`.
pub const SAMPLE_REPORTS: &str = include_str!("sample_reports.json");

/// Mailchimp problem-detail body returned for an invalid API key.
pub const SAMPLE_API_ERROR: &str = r#"{
  "type": "https://mailchimp.com/developer/marketing/docs/errors/",
  "title": "API Key Invalid",
  "status": 401,
  "detail": "Your API key may be invalid, or you've attempted to access the wrong datacenter.",
  "instance": "4ff2ec1a-8ed7-4f4b-9a4b-0a6e1b9f4ac8"
}"#;
