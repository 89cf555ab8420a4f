//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

use crate::response::ParsedResponse;
use crate::state::RequestState;

use super::{App, AppMessage, SCROLL_STEP};

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::AnswerReceived(response) => {
                let answer = ParsedResponse::parse(response.answer_text());
                let table = response.table_preview();
                if !table.is_uniform() {
                    warn!(rows = table.len(), "table rows differ in shape; aligning to first row");
                }
                debug!(
                    blocks = answer.blocks.len(),
                    has_sql = answer.has_sql(),
                    rows = table.len(),
                    "state -> displayed"
                );

                self.request_state = RequestState::Displayed {
                    answer,
                    table,
                    table_note: response.table_note().map(str::to_string),
                };
                self.input.clear();
            }
            AppMessage::AnswerFailed {
                code,
                status,
                error,
            } => {
                warn!(code, ?status, %error, "question failed");
                self.request_state = RequestState::failed();
            }
        }
        self.disclosure.reset();
        self.answer_scroll = 0;
    }

    /// Apply one key press.
    ///
    /// Enter submits (ignored while a question is in flight). Shift+Enter,
    /// Alt+Enter and Ctrl+J insert a newline; Shift+Enter needs a terminal
    /// with keyboard enhancement support.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Esc => self.quit(),
            KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
                self.input.insert_newline();
            }
            KeyCode::Char('j') if ctrl => self.input.insert_newline(),
            KeyCode::Enter => {
                if self.request_state.is_loading() {
                    return;
                }
                self.submit();
            }
            KeyCode::Tab => self.toggle_sql(),
            KeyCode::PageUp => self.scroll_answer_up(SCROLL_STEP),
            KeyCode::PageDown => self.scroll_answer_down(SCROLL_STEP),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            KeyCode::Char(c) if !ctrl => self.input.insert_char(shifted(c, key.modifiers)),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Insert bracketed-paste text into the question.
    pub fn handle_paste(&mut self, text: &str) {
        self.input.insert_str(text);
        self.mark_dirty();
    }
}

/// The character a key press should type.
///
/// Enhanced-keyboard terminals that do not send alternate keys report
/// Shift+a as `a` with SHIFT, so letters are upper-cased here. Already
/// shifted characters pass through unchanged.
fn shifted(c: char, modifiers: KeyModifiers) -> char {
    if modifiers.contains(KeyModifiers::SHIFT) && c.is_lowercase() {
        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(single), None) => single,
            _ => c,
        }
    } else {
        c
    }
}
