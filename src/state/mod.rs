//! Application state management
//!
//! This module contains the state containers owned by the [`App`](crate::app::App):
//! - SessionContext: the session identifier shared by every request
//! - RequestState: the idle/loading/displayed/failed lifecycle of one question
//! - Disclosure: show/hide state of the SQL block

pub mod disclosure;
pub mod request;
pub mod session;

pub use disclosure::Disclosure;
pub use request::{RequestState, CONNECTION_ERROR_MESSAGE};
pub use session::SessionContext;
