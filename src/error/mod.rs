//! Error types for askdata.
//!
//! - [`AskError`]: one failed question round trip. The UI collapses every
//!   variant into the same fixed message; the variant and its text go to the log.
//! - [`ConfigError`]: invalid configuration, reported before the terminal UI starts.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of one ask request.
#[derive(Debug, Error)]
pub enum AskError {
    /// The request body could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The exchange with the backend failed
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The backend answered with a non-2xx status
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl AskError {
    /// HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AskError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            AskError::Encode(_) => "ASK_ENCODE",
            AskError::Transport(_) => "ASK_TRANSPORT",
            AskError::Status { .. } => "ASK_STATUS",
            AskError::Decode(_) => "ASK_DECODE",
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint is not a URL
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The endpoint uses a scheme other than http or https
    #[error("Unsupported endpoint scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_error_display() {
        let err = AskError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned status 500: boom");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.error_code(), "ASK_STATUS");
    }

    #[test]
    fn test_transport_error_from_http_error() {
        let err: AskError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, AskError::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: could not connect: refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = AskError::Decode(json_err);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.error_code(), "ASK_DECODE");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedScheme {
            scheme: "ftp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported endpoint scheme 'ftp' (expected http or https)"
        );
    }
}
