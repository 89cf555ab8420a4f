//! Client configuration.
//!
//! Values are layered: built-in defaults, then environment variables, then
//! command-line flags.
//!
//! # Example
//!
//! ```ignore
//! use askdata::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()
//!     .with_endpoint("http://analytics.internal:8000/ask");
//! config.validate()?;
//! ```

use std::path::PathBuf;

use crate::backend::DEFAULT_ENDPOINT;
use crate::cli::CliOverrides;
use crate::error::ConfigError;

/// Environment variable overriding the ask endpoint.
pub const ENDPOINT_ENV: &str = "ASKDATA_ENDPOINT";

/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV: &str = "ASKDATA_LOG_FILE";

/// Configuration for one client run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the ask endpoint
    pub endpoint: String,
    /// Explicit log file; `None` uses [`default_log_file`]
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_file: None,
        }
    }
}

impl ClientConfig {
    /// Create a ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ask endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overlaid with `ASKDATA_ENDPOINT` and `ASKDATA_LOG_FILE`.
    ///
    /// Empty variables are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = non_empty_env(ENDPOINT_ENV) {
            config = config.with_endpoint(endpoint);
        }
        if let Some(path) = non_empty_env(LOG_FILE_ENV) {
            config = config.with_log_file(path);
        }
        config
    }

    /// Apply command-line flags on top of this configuration.
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(path) = &overrides.log_file {
            self.log_file = Some(path.clone());
        }
        self
    }

    /// Check that the endpoint is an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::InvalidEndpoint {
                url: self.endpoint.clone(),
                reason: e.to_string(),
            }
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    /// Log file to write to: the explicit one, else the default location.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_file)
    }
}

/// `<cache dir>/askdata/askdata.log`, if the platform has a cache dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("askdata").join("askdata.log"))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
