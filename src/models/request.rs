use serde::{Deserialize, Serialize};

/// Request body for the ask endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskRequest {
    /// The question exactly as typed
    pub question: String,
    /// Session identifier shared by every request of one client run
    pub session_id: String,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            session_id: session_id.into(),
        }
    }
}
