//! Data preview grid.
//!
//! The grid is rendered as plain lines so it scrolls together with the
//! narrative. Columns are sized to their widest cell, capped at
//! [`MAX_COLUMN_WIDTH`]; rows wider than the area are cut.

use ratatui::{
    style::{Modifier, Style},
    text::Line,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{fit_to_width, truncate_to_width};
use super::theme::{COLOR_BORDER, COLOR_TABLE_HEADER};
use crate::models::TablePreview;

/// Widest a single column may get.
pub const MAX_COLUMN_WIDTH: usize = 24;

const COLUMN_SEPARATOR: &str = " │ ";

/// Render `table` as header, rule and body lines no wider than `max_width`.
///
/// Returns nothing when the first row has no columns.
pub fn table_lines(table: &TablePreview, max_width: usize) -> Vec<Line<'static>> {
    let header = table.header();
    if header.is_empty() {
        return Vec::new();
    }
    let body = table.body();
    let widths = column_widths(&header, &body);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::styled(
        truncate_to_width(&join_row(&header, &widths), max_width),
        Style::default()
            .fg(COLOR_TABLE_HEADER)
            .add_modifier(Modifier::BOLD),
    ));

    let rule = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::styled(
        truncate_to_width(&rule, max_width),
        Style::default().fg(COLOR_BORDER),
    ));

    lines.extend(
        body.iter()
            .map(|row| Line::raw(truncate_to_width(&join_row(row, &widths), max_width))),
    );
    lines
}

fn column_widths(header: &[String], body: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(i, name)| {
            body.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(name.width()))
                .max()
                .unwrap_or(0)
                .clamp(1, MAX_COLUMN_WIDTH)
        })
        .collect()
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    let row = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| fit_to_width(&single_line(cell), *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    row.trim_end().to_string()
}

/// Cells are shown on one line.
fn single_line(cell: &str) -> String {
    cell.replace(['\n', '\r', '\t'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn preview(value: serde_json::Value) -> TablePreview {
        serde_json::from_value::<Vec<crate::models::TableRow>>(value)
            .map(TablePreview::new)
            .unwrap()
    }

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_simple_grid() {
        let table = preview(json!([{"region": "EMEA", "revenue": 1200}, {"region": "APAC", "revenue": 950}]));
        let lines = texts(&table_lines(&table, 80));
        assert_eq!(
            lines,
            vec![
                "region │ revenue",
                "───────┼────────",
                "EMEA   │ 1200",
                "APAC   │ 950",
            ]
        );
    }

    #[test]
    fn test_missing_keys_render_empty() {
        let table = preview(json!([{"a": 1, "b": 2}, {"b": 3}]));
        let lines = texts(&table_lines(&table, 80));
        assert_eq!(lines[2], "1 │ 2");
        assert_eq!(lines[3], "  │ 3");
    }

    #[test]
    fn test_long_cells_capped() {
        let long = "x".repeat(40);
        let table = preview(json!([{"note": long}]));
        let lines = texts(&table_lines(&table, 80));
        assert_eq!(lines[2].chars().count(), MAX_COLUMN_WIDTH);
        assert!(lines[2].ends_with('…'));
    }

    #[test]
    fn test_rows_cut_to_area() {
        let table = preview(json!([{"first_column": "value one", "second_column": "value two"}]));
        for line in table_lines(&table, 12) {
            assert!(line.width() <= 12);
        }
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert!(table_lines(&TablePreview::default(), 80).is_empty());
        assert!(table_lines(&preview(json!([{}])), 80).is_empty());
    }

    #[test]
    fn test_multiline_cells_flattened() {
        let table = preview(json!([{"a": "one\ntwo"}]));
        let lines = texts(&table_lines(&table, 80));
        assert_eq!(lines[2], "one two");
    }
}
