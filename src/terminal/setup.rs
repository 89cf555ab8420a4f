//! Entering and leaving the alternate-screen UI.

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and enable bracketed paste.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Ask the terminal to report modifiers on Enter (Kitty protocol).
///
/// Without this most terminals send Shift+Enter as plain Enter. Reporting all
/// keys as escape codes also encodes Shift+letter as the base key plus SHIFT,
/// so alternate keys are requested to get the shifted character back.
/// Returns `false` when the request could not be written.
pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    )
    .is_ok()
}

pub fn pop_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(writer, PopKeyboardEnhancementFlags).is_ok()
}

/// Restore the normal screen. Never fails; safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);

    // Ghostty and Kitty only honor the keyboard reset after the screen switch
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Best-effort restore of stdout, used from the panic hook.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    let _ = pop_keyboard_enhancements(&mut stdout);
    leave_tui_mode(&mut stdout);
}
