//! Request lifecycle state.
//!
//! ```text
//! Idle --submit--> Loading --answer--> Displayed
//!                     |                    |
//!                     +--failure--> Failed +--submit--> Loading
//! ```

use crate::models::TablePreview;
use crate::response::ParsedResponse;

/// Narrative shown when a request fails for any reason.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to backend.";

/// Where the current question is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// Nothing asked yet
    #[default]
    Idle,
    /// Waiting for the backend
    Loading,
    /// Answer received and parsed
    Displayed {
        answer: ParsedResponse,
        table: TablePreview,
        table_note: Option<String>,
    },
    /// Request failed; shown like an answer carrying the fixed error text
    Failed { answer: ParsedResponse },
}

impl RequestState {
    /// Failed state with the fixed error narrative.
    pub fn failed() -> Self {
        Self::Failed {
            answer: ParsedResponse::message(CONNECTION_ERROR_MESSAGE),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Answer to render, if any.
    pub fn answer(&self) -> Option<&ParsedResponse> {
        match self {
            Self::Displayed { answer, .. } | Self::Failed { answer } => Some(answer),
            Self::Idle | Self::Loading => None,
        }
    }

    /// Table preview to render, if any.
    pub fn table(&self) -> Option<&TablePreview> {
        match self {
            Self::Displayed { table, .. } => Some(table),
            _ => None,
        }
    }

    pub fn table_note(&self) -> Option<&str> {
        match self {
            Self::Displayed { table_note, .. } => table_note.as_deref(),
            _ => None,
        }
    }

    /// SQL of the current answer, if any.
    pub fn sql(&self) -> Option<&str> {
        self.answer().and_then(|answer| answer.sql.as_deref())
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Displayed { .. } => "displayed",
            Self::Failed { .. } => "failed",
        }
    }
}
