use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_TEXT};

/// A multi-line text input with cursor handling and scrolling.
///
/// The cursor is a byte offset that always sits on a char boundary.
/// Newlines are inserted explicitly; lines never wrap and scroll
/// horizontally to keep the cursor visible.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Cursor position (byte offset into `content`)
    cursor: usize,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a line break at the cursor
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert pasted text at the cursor, normalizing line endings
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.content.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    /// Delete the character after the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Move cursor one character to the left
    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Move cursor one character to the right
    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to the start of the current line
    pub fn move_cursor_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// Move cursor to the end of the current line
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.content[self.cursor..]
            .find('\n')
            .map_or(self.content.len(), |offset| self.cursor + offset);
    }

    /// Get the current text content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the cursor position as a byte offset
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Set the text content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    /// Clear all content and reset cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Check if the input box is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of lines (an empty input has one)
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Cursor line index and display column
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.cursor];
        let line = before.matches('\n').count();
        let col = before[self.line_start()..]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (line, col)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn line_start(&self) -> usize {
        self.content[..self.cursor]
            .rfind('\n')
            .map_or(0, |idx| idx + 1)
    }

    /// Render the input box with the given title
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.content.is_empty() {
            buf.set_stringn(
                inner.x,
                inner.y,
                placeholder,
                inner.width as usize,
                Style::default().fg(COLOR_DIM),
            );
            if focused {
                set_cursor_cell(buf, Position::new(inner.x, inner.y));
            }
            return;
        }

        let (cursor_line, cursor_col) = self.cursor_line_col();
        let scroll_y = cursor_line.saturating_sub(inner.height as usize - 1);
        let scroll_x = cursor_col.saturating_sub(inner.width as usize - 1);

        let text_style = Style::default().fg(COLOR_INPUT_TEXT);
        for (row, line) in self
            .content
            .split('\n')
            .skip(scroll_y)
            .take(inner.height as usize)
            .enumerate()
        {
            let visible = skip_columns(line, scroll_x);
            buf.set_stringn(
                inner.x,
                inner.y + row as u16,
                visible,
                inner.width as usize,
                text_style,
            );
        }

        if focused {
            let x = inner.x + (cursor_col - scroll_x) as u16;
            let y = inner.y + (cursor_line - scroll_y) as u16;
            set_cursor_cell(buf, Position::new(x, y));
        }
    }
}

/// Drop leading characters until `columns` display columns are skipped.
fn skip_columns(line: &str, columns: usize) -> &str {
    let mut skipped = 0;
    for (idx, c) in line.char_indices() {
        if skipped >= columns {
            return &line[idx..];
        }
        skipped += c.width().unwrap_or(0);
    }
    ""
}

fn set_cursor_cell(buf: &mut Buffer, position: Position) {
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
    }
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, placeholder: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            placeholder,
            focused,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.placeholder, self.focused);
    }
}
