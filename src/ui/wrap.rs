//! Word wrapping for the answer area.
//!
//! Lines are wrapped before they reach the `Paragraph` so the number of rows
//! is known up front and the scroll range can be computed exactly.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

/// Wrap every line to at most `width` display columns.
///
/// Lines that already fit are returned untouched. Words longer than a row are
/// broken mid-word. Leading whitespace is kept on a line's first row only.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }

    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if line.width() <= width {
            out.push(line);
        } else {
            out.extend(wrap_line(&line, width));
        }
    }
    out
}

type Cell = (char, Style);

fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    let cells: Vec<Cell> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut row: Vec<Cell> = Vec::new();
    let mut used = 0;

    for token in cells.chunk_by(|a, b| a.0.is_whitespace() == b.0.is_whitespace()) {
        let token_width = cells_width(token);

        if token[0].0.is_whitespace() {
            if used + token_width <= width {
                if !row.is_empty() || rows.is_empty() {
                    row.extend_from_slice(token);
                    used += token_width;
                }
            } else if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            continue;
        }

        if used + token_width > width && !row.is_empty() {
            trim_trailing_whitespace(&mut row);
            rows.push(std::mem::take(&mut row));
            used = 0;
        }

        for &(c, style) in token {
            let w = c.width().unwrap_or(0);
            if used + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push((c, style));
            used += w;
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }

    rows.into_iter()
        .map(|cells| {
            let mut wrapped = Line::from(into_spans(cells));
            wrapped.style = line.style;
            wrapped.alignment = line.alignment;
            wrapped
        })
        .collect()
}

fn cells_width(cells: &[Cell]) -> usize {
    cells.iter().map(|(c, _)| c.width().unwrap_or(0)).sum()
}

fn trim_trailing_whitespace(row: &mut Vec<Cell>) {
    while row.last().is_some_and(|(c, _)| c.is_whitespace()) {
        row.pop();
    }
}

/// Merge runs of equally styled characters back into spans.
fn into_spans(cells: Vec<Cell>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (c, style) in cells {
        match spans.last_mut() {
            Some(span) if span.style == style => span.content.to_mut().push(c),
            _ => spans.push(Span::styled(c.to_string(), style)),
        }
    }
    spans
}
