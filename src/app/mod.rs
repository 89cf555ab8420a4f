//! Application state and the question flow.
//!
//! The [`App`] owns everything the UI renders. Submitting a question spawns
//! one task that talks to the backend and reports back through
//! [`AppMessage`]; results are applied on the UI task by
//! [`App::handle_message`].

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapters::ReqwestHttpClient;
use crate::backend::BackendClient;
use crate::config::ClientConfig;
use crate::models::AskRequest;
use crate::state::{Disclosure, RequestState, SessionContext};
use crate::traits::HttpClient;
use crate::widgets::InputBox;

/// Lines moved per PageUp/PageDown in the answer area.
pub const SCROLL_STEP: u16 = 5;

/// Main application state
pub struct App {
    /// Identifier sent with every question from this instance
    pub session: SessionContext,
    /// Question being composed
    pub input: InputBox,
    /// Lifecycle of the latest question
    pub request_state: RequestState,
    /// Whether the SQL of the current answer is shown
    pub disclosure: Disclosure,
    /// Vertical scroll of the answer area, in wrapped rows
    pub answer_scroll: u16,
    /// Largest useful `answer_scroll`, recorded by the last render
    pub answer_max_scroll: u16,
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter driving the loading animation
    pub tick_count: u64,
    /// Sender handed to request tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for request results (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Backend client shared with request tasks
    backend: Arc<BackendClient>,
}

impl App {
    /// Create an App talking to the configured endpoint over HTTP.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(&config.endpoint, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create an App with a custom transport.
    pub fn with_http_client(endpoint: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let session = SessionContext::new();
        let backend = Arc::new(BackendClient::new(endpoint, http));

        info!(
            session_id = session.id(),
            endpoint = backend.endpoint(),
            "session started"
        );

        Self {
            session,
            input: InputBox::new(),
            request_state: RequestState::Idle,
            disclosure: Disclosure::new(),
            answer_scroll: 0,
            answer_max_scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            backend,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.backend.endpoint()
    }

    /// Submit the current input as a question.
    ///
    /// Blank input is ignored: no request is sent and no state changes.
    /// Otherwise the state becomes Loading and one request task is spawned.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) {
        let question = self.input.content().to_string();
        if question.trim().is_empty() {
            return;
        }

        info!(chars = question.chars().count(), "submitting question");
        debug!(from = self.request_state.name(), "state -> loading");
        self.request_state = RequestState::Loading;
        self.mark_dirty();

        let request = AskRequest::new(question, self.session.id());
        let backend = Arc::clone(&self.backend);
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match backend.ask(&request).await {
                Ok(response) => AppMessage::AnswerReceived(response),
                Err(e) => AppMessage::AnswerFailed {
                    code: e.error_code(),
                    status: e.status(),
                    error: e.to_string(),
                },
            };
            let _ = message_tx.send(message);
        });
    }

    /// Flip SQL visibility. Does nothing when the answer has no SQL.
    pub fn toggle_sql(&mut self) {
        if self.request_state.sql().is_none() {
            return;
        }
        self.disclosure.toggle();
        debug!(shown = self.disclosure.is_shown(), "sql disclosure toggled");
        self.mark_dirty();
    }

    pub fn scroll_answer_up(&mut self, lines: u16) {
        self.answer_scroll = self.answer_scroll.saturating_sub(lines);
        self.mark_dirty();
    }

    pub fn scroll_answer_down(&mut self, lines: u16) {
        self.answer_scroll = self
            .answer_scroll
            .saturating_add(lines)
            .min(self.answer_max_scroll);
        self.mark_dirty();
    }

    /// Record the scroll range of the answer area and pull the current
    /// scroll back inside it. Called while rendering; does not request a redraw.
    pub fn set_answer_max_scroll(&mut self, max_scroll: u16) {
        self.answer_max_scroll = max_scroll;
        self.answer_scroll = self.answer_scroll.min(max_scroll);
    }

    /// Advance the animation tick. Only redraws while waiting.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.request_state.is_loading() {
            self.mark_dirty();
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }
}
