//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport used to reach the answering service

pub mod http;

pub use http::{HttpClient, HttpError, HttpResponse, JSON_CONTENT_TYPE};
