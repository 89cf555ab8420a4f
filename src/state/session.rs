//! Session-level state
//!
//! One [`SessionContext`] is created when the client starts and lives as long
//! as the [`App`](crate::app::App). The backend keys its conversation history
//! on the identifier, so it must not change between requests.

use uuid::Uuid;

/// Opaque session identifier for one client run.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: String,
}

impl SessionContext {
    /// Create a session with a fresh random identifier.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Create a session with a known identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// First eight characters of the identifier, for the status line.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
