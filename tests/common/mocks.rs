//! Mock transports and canned backend payloads.

pub use askdata::adapters::mock::{MockHttpClient, MockResponse};
pub use askdata::traits::HttpError;

use serde_json::{json, Value};

/// The sample answer: narrative, fenced SQL, one table row.
pub fn revenue_answer() -> Value {
    json!({
        "response": "Here is the data.\n```sql\nSELECT * FROM t```",
        "table": [{"a": 1, "b": 2}]
    })
}

/// An answer with numbered steps and no table.
pub fn stepped_answer() -> Value {
    json!({
        "response": "Explanation text\n1. Step one\n2. Step two",
        "table": null
    })
}

/// Mock whose transport always fails to connect.
pub fn unreachable_backend() -> MockHttpClient {
    MockHttpClient::with_default(MockResponse::Error(HttpError::ConnectionFailed(
        "connection refused".to_string(),
    )))
}

/// Mock that answers every request with `body`.
pub fn answering_backend(body: Value) -> MockHttpClient {
    MockHttpClient::with_default(MockResponse::json(body))
}
