//! Tabular preview of query results.
//!
//! Rows arrive as JSON objects. The column set and order come from the first
//! row; later rows are aligned to those columns by key, so a row with a
//! different shape never shifts values into the wrong column.

use serde_json::{Map, Value};

/// One result row: column name to cell value, in backend key order.
pub type TableRow = Map<String, Value>;

/// Ordered result rows for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePreview {
    rows: Vec<TableRow>,
}

impl TablePreview {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of body rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Column names from the first row's keys.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Header cells.
    pub fn header(&self) -> Vec<String> {
        self.columns().into_iter().map(str::to_string).collect()
    }

    /// Body cells, one vector per row, aligned to [`columns`](Self::columns).
    ///
    /// Keys missing from a row render empty; keys not in the first row are not shown.
    pub fn body(&self) -> Vec<Vec<String>> {
        let columns = self.columns();
        self.rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| render_cell(row.get(*column)))
                    .collect()
            })
            .collect()
    }

    /// Whether every row has exactly the first row's key set.
    pub fn is_uniform(&self) -> bool {
        let Some(first) = self.rows.first() else {
            return true;
        };
        self.rows
            .iter()
            .all(|row| row.len() == first.len() && first.keys().all(|key| row.contains_key(key)))
    }
}

/// Display text for one cell.
///
/// Strings render verbatim, `null` and missing cells render empty, nested
/// values render as compact JSON.
pub fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(nested) => nested.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<TableRow> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_header_and_body() {
        let preview = TablePreview::new(rows(json!([{"a": 1, "b": 2}])));
        assert_eq!(preview.header(), vec!["a", "b"]);
        assert_eq!(preview.body(), vec![vec!["1", "2"]]);
        assert!(preview.is_uniform());
    }

    #[test]
    fn test_key_order_follows_payload() {
        let preview = TablePreview::new(rows(json!([{"region": "North", "amount": 10.5}])));
        assert_eq!(preview.columns(), vec!["region", "amount"]);
        assert_eq!(preview.body(), vec![vec!["North", "10.5"]]);
    }

    #[test]
    fn test_rows_aligned_by_key() {
        let preview = TablePreview::new(rows(json!([
            {"a": 1, "b": 2},
            {"b": 4, "a": 3},
            {"a": 5, "c": 6}
        ])));
        assert_eq!(
            preview.body(),
            vec![vec!["1", "2"], vec!["3", "4"], vec!["5", ""]]
        );
        assert!(!preview.is_uniform());
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(render_cell(None), "");
        assert_eq!(render_cell(Some(&Value::Null)), "");
        assert_eq!(render_cell(Some(&json!("text"))), "text");
        assert_eq!(render_cell(Some(&json!(false))), "false");
        assert_eq!(render_cell(Some(&json!(-3))), "-3");
        assert_eq!(render_cell(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(render_cell(Some(&json!({"k": "v"}))), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_empty_preview() {
        let preview = TablePreview::default();
        assert!(preview.is_empty());
        assert!(preview.columns().is_empty());
        assert!(preview.body().is_empty());
        assert!(preview.is_uniform());
    }
}
