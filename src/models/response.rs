use serde::Deserialize;

use super::deserialize_lenient_text;
use super::table::{TablePreview, TableRow};

/// Answer text used when the backend sends no `response` field.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response from backend";

/// Response body from the ask endpoint.
///
/// Every field is optional; missing or `null` fields fall back to defaults
/// instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AskResponse {
    /// Answer text, possibly embedding a fenced SQL block
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub response: Option<String>,
    /// Result rows of the generated query
    #[serde(default)]
    pub table: Option<Vec<TableRow>>,
    /// Reason the table is missing (e.g. "Query returned no rows.")
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub table_error: Option<String>,
}

impl AskResponse {
    /// Answer text, or the placeholder when absent or empty.
    pub fn answer_text(&self) -> &str {
        self.response
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_RESPONSE_PLACEHOLDER)
    }

    /// Table preview, empty when absent.
    pub fn table_preview(&self) -> TablePreview {
        TablePreview::new(self.table.clone().unwrap_or_default())
    }

    /// Non-blank table note.
    pub fn table_note(&self) -> Option<&str> {
        self.table_error
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let json = r#"{
            "response": "Here is the data.\n```sql\nSELECT * FROM t```",
            "table": [{"a": 1, "b": 2}],
            "table_error": null
        }"#;
        let response: AskResponse = serde_json::from_str(json).unwrap();
        assert!(response.answer_text().starts_with("Here is the data."));
        assert_eq!(response.table_preview().len(), 1);
        assert_eq!(response.table_note(), None);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let response: AskResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.answer_text(), NO_RESPONSE_PLACEHOLDER);
        assert!(response.table_preview().is_empty());
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let response: AskResponse =
            serde_json::from_str(r#"{"response": null, "table": null}"#).unwrap();
        assert_eq!(response.answer_text(), NO_RESPONSE_PLACEHOLDER);
        assert!(response.table_preview().is_empty());
    }

    #[test]
    fn test_empty_response_uses_placeholder() {
        let response: AskResponse = serde_json::from_str(r#"{"response": ""}"#).unwrap();
        assert_eq!(response.answer_text(), NO_RESPONSE_PLACEHOLDER);
    }

    #[test]
    fn test_table_error_note() {
        let response: AskResponse = serde_json::from_str(
            r#"{"response": "ok", "table": null, "table_error": "Query returned no rows."}"#,
        )
        .unwrap();
        assert_eq!(response.table_note(), Some("Query returned no rows."));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response: AskResponse =
            serde_json::from_str(r#"{"response": "ok", "elapsed_ms": 12}"#).unwrap();
        assert_eq!(response.answer_text(), "ok");
    }

    #[test]
    fn test_error_body_has_no_answer() {
        // The backend's 400 body carries only "error"
        let response: AskResponse =
            serde_json::from_str(r#"{"error": "No question provided"}"#).unwrap();
        assert_eq!(response.answer_text(), NO_RESPONSE_PLACEHOLDER);
    }
}
