//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let mock = MockHttpClient::with_default(MockResponse::json(revenue_answer()));
//! let mut app = TestAppBuilder::new().with_input("Revenue by region?").build(&mock);
//! app.submit();
//! let msg = next_message(&mut app).await;
//! app.handle_message(msg);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;

use askdata::app::{App, AppMessage};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Endpoint given to apps backed by a mock transport.
pub const TEST_ENDPOINT: &str = "http://askdata.test/ask";

/// How long tests wait for a request task to report back.
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(2);

/// Builder for creating test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    input: Option<String>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the question input.
    pub fn with_input(mut self, text: &str) -> Self {
        self.input = Some(text.to_string());
        self
    }

    /// Build an App whose requests go to `mock`.
    pub fn build(self, mock: &MockHttpClient) -> App {
        let mut app = App::with_http_client(TEST_ENDPOINT, Arc::new(mock.clone()));
        if let Some(text) = self.input {
            app.input.set_content(text);
        }
        app
    }
}

/// Wait for the next message from a request task.
///
/// Panics if none arrives within [`MESSAGE_TIMEOUT`].
pub async fn next_message(app: &mut App) -> AppMessage {
    let rx = app.message_rx.as_mut().expect("message receiver already taken");
    tokio::time::timeout(MESSAGE_TIMEOUT, rx.recv())
        .await
        .expect("timed out waiting for a message")
        .expect("message channel closed")
}

/// Type `question`, submit it, and apply the result.
pub async fn ask(app: &mut App, question: &str) {
    app.input.set_content(question);
    app.submit();
    let msg = next_message(app).await;
    app.handle_message(msg);
}

/// Flatten a buffer into lines of text.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Render `app` on a test terminal and return the screen text.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| askdata::ui::render(f, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}
