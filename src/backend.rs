//! Client for the question-answering backend.
//!
//! One operation: POST `{question, session_id}` as JSON to the configured
//! endpoint and decode the answer payload.

use std::sync::Arc;

use crate::error::AskError;
use crate::models::{AskRequest, AskResponse};
use crate::traits::HttpClient;

/// Default ask endpoint of a locally running backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ask";

/// Client for the ask endpoint.
#[derive(Clone)]
pub struct BackendClient {
    /// Full URL of the ask endpoint
    endpoint: String,
    /// Transport
    http: Arc<dyn HttpClient>,
}

impl BackendClient {
    pub fn new(endpoint: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one question and decode the answer.
    ///
    /// Any non-2xx status is an error, regardless of the body.
    pub async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AskError> {
        let body = serde_json::to_string(request).map_err(AskError::Encode)?;

        let response = self.http.post_json(&self.endpoint, body).await?;

        if !response.is_success() {
            return Err(AskError::Status {
                status: response.status,
                body: response.body_text(),
            });
        }

        response.json::<AskResponse>().map_err(AskError::Decode)
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
