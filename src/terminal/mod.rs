//! Terminal lifecycle with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw alternate-screen mode and
//! puts it back when dropped, including on early `?` returns. Panics are
//! covered separately by [`setup_panic_hook`].
//!
//! ```no_run
//! use askdata::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{
    emergency_restore, enter_tui_mode, leave_tui_mode, pop_keyboard_enhancements,
    push_keyboard_enhancements,
};

use color_eyre::Result;
use crossterm::terminal::{enable_raw_mode, supports_keyboard_enhancement};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

/// Owns the ratatui terminal; restores the screen on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Whether Shift+Enter can be told apart from Enter
    keyboard_enhanced: bool,
    restored: bool,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen, request keyboard
    /// enhancements where supported, and clear.
    pub fn new() -> Result<Self> {
        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }
        if keyboard_enhanced {
            push_keyboard_enhancements(&mut stdout);
        }
        debug!(keyboard_enhanced, "terminal ready");

        let mut manager = Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
            keyboard_enhanced,
            restored: false,
        };
        manager.terminal.clear()?;
        Ok(manager)
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls, including the one from drop,
    /// do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        if self.keyboard_enhanced {
            pop_keyboard_enhancements(self.terminal.backend_mut());
        }
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
