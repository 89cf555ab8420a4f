//! Transport seam for the ask endpoint.
//!
//! The backend client sends exactly one kind of request: a JSON body POSTed
//! to a fixed URL. [`HttpClient`] covers that and nothing else, so tests can
//! swap in [`MockHttpClient`](crate::adapters::MockHttpClient).

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Content type of every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text for error reports. Invalid UTF-8 is replaced, not rejected.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The exchange itself failed; no status was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    ConnectionFailed(String),

    #[error("timed out: {0}")]
    Timeout(String),

    /// The request could not be built, usually a malformed URL
    #[error("bad request target: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Other(String),
}

/// JSON POST transport.
///
/// ```ignore
/// use askdata::traits::HttpClient;
///
/// let response = client
///     .post_json("http://localhost:8000/ask", r#"{"question":"hi"}"#.to_string())
///     .await?;
/// assert!(response.is_success());
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `body` to `url` with a [`JSON_CONTENT_TYPE`] content type.
    ///
    /// Non-2xx statuses come back as an [`HttpResponse`]; `Err` is reserved
    /// for failures where no response arrived.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, HttpError>;
}
