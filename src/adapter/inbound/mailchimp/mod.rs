//! Mailchimp campaign reports pull adapter.

pub mod client;
pub mod dto;
pub mod flatten;
pub mod settings;
pub mod source;

pub use client::{derive_endpoint, ChimpApi};
pub use flatten::{flatten, METRICS_PER_REPORT};
pub use settings::MailchimpConfig;
pub use source::MailChimp;
