//! AppMessage enum for async communication within the application.

use crate::models::AskResponse;

/// Messages sent from request tasks back to the UI task
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// The backend answered with a decodable payload
    AnswerReceived(AskResponse),
    /// Transport, status, or decode failure
    AnswerFailed {
        /// [`AskError::error_code`](crate::error::AskError::error_code)
        code: &'static str,
        /// HTTP status, when the backend answered
        status: Option<u16>,
        error: String,
    },
}
