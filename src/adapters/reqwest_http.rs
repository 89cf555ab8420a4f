//! reqwest transport.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::traits::{HttpClient, HttpError, HttpResponse, JSON_CONTENT_TYPE};

/// [`HttpClient`] over a shared `reqwest::Client`.
///
/// No request timeout is configured: a backend that never answers keeps the
/// question in the loading state until the user quits.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

fn map_error(err: reqwest::Error) -> HttpError {
    let text = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(text)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(text)
    } else if err.is_builder() {
        HttpError::InvalidUrl(text)
    } else {
        HttpError::Other(text)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(map_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_error)?;
        Ok(HttpResponse::new(status, body))
    }
}
