use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Vendor answered a push with a status outside 200-299.
    ///
    /// The trailing newline is part of the message callers match on.
    #[error("received bad status code, {0}\n")]
    BadStatus(u16),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures a caller may reasonably retry later.
    ///
    /// Transport failures and server-side statuses are retryable; conversion,
    /// configuration and decoding failures will fail the same way again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::BadStatus(code) => *code == 429 || *code >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_status_message_is_exact() {
        let err = Error::BadStatus(500);
        assert_eq!(err.to_string(), "received bad status code, 500\n");
    }

    #[test]
    fn undeterminable_type_is_transparent() {
        let err = Error::from(DomainError::UndeterminableType);
        assert_eq!(
            err.to_string(),
            "unable to extract value from Fields, undeterminable type"
        );
    }

    #[test]
    fn server_errors_are_retryable() {
        assert!(Error::BadStatus(500).is_retryable());
        assert!(Error::BadStatus(503).is_retryable());
        assert!(Error::BadStatus(429).is_retryable());
    }

    #[test]
    fn client_errors_are_fatal() {
        assert!(!Error::BadStatus(400).is_retryable());
        assert!(!Error::BadStatus(403).is_retryable());
        assert!(!Error::from(DomainError::UndeterminableType).is_retryable());
        assert!(!Error::Parse("bad".into()).is_retryable());
    }

    #[test]
    fn config_error_mentions_field() {
        let err = Error::from(ConfigError::MissingField { field: "api_key" });
        assert_eq!(err.to_string(), "missing required field: api_key");
    }
}
