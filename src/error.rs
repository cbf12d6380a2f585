//! Error types for the portfolio core.

use std::path::PathBuf;

/// The main error type for folio operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("GitHub API unreachable: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("GitHub API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The payload did not match the expected shape.
    #[error("failed to deserialize GitHub response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Configuration is syntactically valid but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parse failure.
    #[error("failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization failure.
    #[error("failed to serialize configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the data source could not deliver a value.
    ///
    /// Every variant raised by a fetch is recoverable and maps to the
    /// "no value" fallback at the loader boundary.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_is_unavailable() {
        let err = Error::Status {
            status: 403,
            body: "rate limited".to_string(),
        };
        assert!(err.is_unavailable());
        assert_eq!(err.to_string(), "GitHub API error (403): rate limited");
    }

    #[test]
    fn config_errors_are_not_unavailable() {
        assert!(!Error::InvalidConfig("cap".to_string()).is_unavailable());
        assert!(!Error::ConfigNotFound(PathBuf::from("folio.toml")).is_unavailable());
    }
}
