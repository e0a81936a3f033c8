//! Flatten nested campaign reports into scalar metrics.

use chrono::{DateTime, Utc};

use super::dto::Report;
use crate::domain::{FieldValue, Tags};
use crate::port::outbound::accumulator::Accumulator;

/// Number of metrics emitted per report.
pub const METRICS_PER_REPORT: usize = 31;

/// Tags shared by every metric of a report: `id` and `campaign_title`.
#[must_use]
pub fn report_tags(report: &Report) -> Tags {
    let mut tags = Tags::new();
    tags.insert("id".into(), report.id.clone());
    tags.insert("campaign_title".into(), report.campaign_title.clone());
    tags
}

/// Every scalar of a report as `(metric name, value)`, in emission order.
///
/// Time-series entries are not included.
#[must_use]
pub fn report_metrics(report: &Report) -> [(&'static str, FieldValue); METRICS_PER_REPORT] {
    let opens = &report.opens;
    let clicks = &report.clicks;
    let likes = &report.facebook_likes;
    let industry = &report.industry_stats;
    let list = &report.list_stats;

    [
        ("emails_sent", report.emails_sent.into()),
        ("abuse_reports", report.abuse_reports.into()),
        ("unsubscribed", report.unsubscribed.into()),
        ("hard_bounces", report.bounces.hard_bounces.into()),
        ("soft_bounces", report.bounces.soft_bounces.into()),
        ("syntax_errors", report.bounces.syntax_errors.into()),
        ("forwards_count", report.forwards.forwards_count.into()),
        ("forwards_opens", report.forwards.forwards_opens.into()),
        ("opens_total", opens.opens_total.into()),
        ("unique_opens", opens.unique_opens.into()),
        ("open_rate", opens.open_rate.into()),
        ("last_open", opens.last_open.clone().into()),
        ("clicks_total", clicks.clicks_total.into()),
        ("unique_clicks", clicks.unique_clicks.into()),
        (
            "unique_subscriber_clicks",
            clicks.unique_subscriber_clicks.into(),
        ),
        ("click_rate", clicks.click_rate.into()),
        ("last_click", clicks.last_click.clone().into()),
        ("facebook_recipient_likes", likes.recipient_likes.into()),
        ("facebook_unique_likes", likes.unique_likes.into()),
        ("facebook_likes", likes.facebook_likes.into()),
        ("industry_type", industry.kind.clone().into()),
        ("industry_open_rate", industry.open_rate.into()),
        ("industry_click_rate", industry.click_rate.into()),
        ("industry_bounce_rate", industry.bounce_rate.into()),
        ("industry_unopen_rate", industry.unopen_rate.into()),
        ("industry_unsub_rate", industry.unsub_rate.into()),
        ("industry_abuse_rate", industry.abuse_rate.into()),
        ("list_stats_sub_rate", list.sub_rate.into()),
        ("list_stats_unsub_rate", list.unsub_rate.into()),
        ("list_stats_open_rate", list.open_rate.into()),
        ("list_stats_click_rate", list.click_rate.into()),
    ]
}

/// Emit every metric of `report` to `acc`, stamped with `fetched_at`.
pub fn flatten(report: &Report, fetched_at: DateTime<Utc>, acc: &mut dyn Accumulator) {
    let tags = report_tags(report);
    for (name, value) in report_metrics(report) {
        acc.add(name, value, &tags, fetched_at);
    }
}
