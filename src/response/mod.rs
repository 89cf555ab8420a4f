//! Parsing of backend answers for display.
//!
//! A raw answer goes through two pure steps:
//!
//! 1. [`segment_response`] separates the narrative from an optional fenced SQL block
//! 2. [`classify_narrative`] turns the narrative into heading/paragraph blocks
//!
//! [`ParsedResponse::parse`] runs both and is what the request lifecycle stores.

pub mod classify;
pub mod segment;

pub use classify::{classify_narrative, BlockKind, NarrativeBlock};
pub use segment::{segment_response, Segments};

/// A backend answer ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Narrative blocks in original order
    pub blocks: Vec<NarrativeBlock>,
    /// Embedded SQL statement, if the answer carried one
    pub sql: Option<String>,
}

impl ParsedResponse {
    /// Parse a raw answer.
    pub fn parse(raw: &str) -> Self {
        let Segments { narrative, sql } = segment_response(raw);
        Self {
            blocks: classify_narrative(&narrative),
            sql,
        }
    }

    /// A response made of one fixed paragraph and no SQL.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![NarrativeBlock::paragraph(text)],
            sql: None,
        }
    }

    pub fn has_sql(&self) -> bool {
        self.sql.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.sql.is_none()
    }
}

/// Shorthand for [`ParsedResponse::parse`].
pub fn parse_response(raw: &str) -> ParsedResponse {
    ParsedResponse::parse(raw)
}
