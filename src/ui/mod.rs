//! UI rendering for askdata
//!
//! One screen, top to bottom:
//! - Title
//! - Question input (grows with its content up to [`MAX_INPUT_LINES`])
//! - Ask button, or the spinner while waiting
//! - Answer area: narrative, SQL disclosure, data preview
//! - Status line with the session and key hints

mod answer;
mod helpers;
mod table;
pub mod theme;
mod wrap;

pub use answer::{answer_lines, DATA_PREVIEW_TITLE, IDLE_HINT, LOADING_TEXT};
pub use helpers::{fit_to_width, spinner_frame, truncate_to_width};
pub use table::{table_lines, MAX_COLUMN_WIDTH};
pub use wrap::wrap_lines;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::widgets::InputBoxWidget;
use theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Page title.
pub const TITLE: &str = "Ask Your Business Data";

/// Placeholder shown in the empty question input.
pub const INPUT_PLACEHOLDER: &str =
    "Type your question... (Press Enter to send, Shift+Enter for new line)";

/// Tallest the question input grows before it scrolls.
pub const MAX_INPUT_LINES: u16 = 6;

/// Render the whole UI.
///
/// Takes the app mutably to record the answer area's scroll range.
pub fn render(frame: &mut Frame, app: &mut App) {
    let input_lines = (app.input.line_count() as u16).clamp(1, MAX_INPUT_LINES);
    let [title_area, input_area, action_area, answer_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(input_lines + 2),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title(frame, title_area);
    frame.render_widget(
        InputBoxWidget::new(&app.input, " Question ", INPUT_PLACEHOLDER, true),
        input_area,
    );
    render_action(frame, app, action_area);
    render_answer(frame, app, answer_area);
    render_status(frame, app, status_area);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::styled(
        TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

/// The Ask button, replaced by a spinner and "Thinking..." while waiting.
fn render_action(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.request_state.is_loading() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACTIVE),
            ),
            Span::styled(LOADING_TEXT, Style::default().fg(COLOR_DIM)),
        ])
    } else {
        let ready = !app.input.content().trim().is_empty();
        let button_style = if ready {
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        Line::from(vec![
            Span::styled("[ Ask ]", button_style),
            Span::styled("  Enter", Style::default().fg(COLOR_DIM)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_answer(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::bordered()
        .title(" Answer ")
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let lines = wrap_lines(
        answer_lines(&app.request_state, &app.disclosure, width),
        width,
    );
    let max_scroll = lines
        .len()
        .saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16;
    app.set_answer_max_scroll(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.answer_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(COLOR_DIM);
    let mut spans = vec![
        Span::styled("session ", dim),
        Span::raw(app.session.short_id().to_string()),
        Span::styled(format!(" · {}", app.endpoint()), dim),
        Span::styled("  │  ", Style::default().fg(COLOR_BORDER)),
    ];
    if app.request_state.sql().is_some() {
        spans.push(Span::styled("Tab SQL · ", dim));
    }
    spans.push(Span::styled("PgUp/PgDn scroll · Esc quit", dim));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
