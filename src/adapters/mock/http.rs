//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors and records every request so tests
//! can assert on what was sent.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, HttpResponse, JSON_CONTENT_TYPE};

/// One POST seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    /// Content type the real transport would send
    pub content_type: &'static str,
    pub body: String,
}

impl RecordedRequest {
    /// The body parsed as JSON, if it is JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response
    Success(HttpResponse),
    /// Return a transport error
    Error(HttpError),
    /// Never resolve
    Pending,
}

impl MockResponse {
    /// 200 response with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(HttpResponse::new(200, value.to_string()))
    }

    /// Response with the given status and raw body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(HttpResponse::new(status, body.to_string()))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are resolved in order: queued one-shot responses, then exact URL
/// matches, then the default response.
///
/// # Example
///
/// ```ignore
/// use askdata::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_default_response(MockResponse::json(serde_json::json!({"response": "hi"})));
/// let response = client.post_json("http://localhost:8000/ask", "{}".to_string()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// One-shot responses consumed in order
    queued: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when nothing else matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that answers every request with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        let client = Self::new();
        client.set_default_response(response);
        client
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Queue a response for the next request only.
    pub fn push_response(&self, response: MockResponse) {
        self.queued.lock().unwrap().push_back(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record_request(&self, url: &str, body: String) {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            content_type: JSON_CONTENT_TYPE,
            body,
        });
    }

    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = self.queued.lock().unwrap().pop_front() {
            return Some(response);
        }
        if let Some(response) = self.responses.lock().unwrap().get(url) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, HttpError> {
        self.record_request(url, body);

        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Pending) => std::future::pending().await,
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
