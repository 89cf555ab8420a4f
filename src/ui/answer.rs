//! Answer area content: narrative, SQL disclosure, data preview.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::table::table_lines;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADING, COLOR_SQL};
use crate::response::{BlockKind, ParsedResponse};
use crate::state::{Disclosure, RequestState};

/// Shown before the first question.
pub const IDLE_HINT: &str = "Ask a question about your data to get started.";

/// Shown while waiting for the backend.
pub const LOADING_TEXT: &str = "Thinking...";

/// Heading above the table preview.
pub const DATA_PREVIEW_TITLE: &str = "Data Preview:";

/// Build the answer area lines for the current state.
///
/// `width` is the usable width; only the table is cut to it, narrative text
/// is left for the paragraph to wrap.
pub fn answer_lines(state: &RequestState, disclosure: &Disclosure, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(COLOR_DIM);
    match state {
        RequestState::Idle => vec![Line::styled(IDLE_HINT, dim)],
        RequestState::Loading => vec![Line::styled(LOADING_TEXT, dim)],
        RequestState::Failed { answer } => {
            narrative_lines(answer, Style::default().fg(COLOR_ERROR))
        }
        RequestState::Displayed {
            answer,
            table,
            table_note,
        } => {
            let mut lines = narrative_lines(answer, Style::default());

            if let Some(sql) = answer.sql.as_deref() {
                lines.push(Line::default());
                lines.push(disclosure_line(disclosure));
                if disclosure.is_shown() {
                    let sql_style = Style::default().fg(COLOR_SQL);
                    lines.extend(
                        sql.lines()
                            .map(|line| Line::styled(format!("  {}", line), sql_style)),
                    );
                }
            }

            if !table.is_empty() {
                let grid = table_lines(table, width);
                if !grid.is_empty() {
                    lines.push(Line::default());
                    lines.push(Line::styled(
                        DATA_PREVIEW_TITLE,
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                    lines.extend(grid);
                }
            }

            if let Some(note) = table_note {
                lines.push(Line::default());
                lines.push(Line::styled(
                    note.clone(),
                    dim.add_modifier(Modifier::ITALIC),
                ));
            }

            lines
        }
    }
}

/// Headings are bold and set apart by a blank line.
fn narrative_lines(answer: &ParsedResponse, paragraph_style: Style) -> Vec<Line<'static>> {
    let heading_style = Style::default()
        .fg(COLOR_HEADING)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(answer.blocks.len() * 2);
    for block in &answer.blocks {
        match block.kind {
            BlockKind::Heading => {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::styled(block.text.clone(), heading_style));
            }
            BlockKind::Paragraph => {
                lines.push(Line::styled(block.text.clone(), paragraph_style));
            }
        }
    }
    lines
}

fn disclosure_line(disclosure: &Disclosure) -> Line<'static> {
    let marker = if disclosure.is_shown() { "▾ " } else { "▸ " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(COLOR_SQL)),
        Span::styled(
            disclosure.label(),
            Style::default().fg(COLOR_SQL).add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled("  (Tab)", Style::default().fg(COLOR_DIM)),
    ])
}
