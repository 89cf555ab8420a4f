mod request;
mod response;
pub mod table;

pub use request::AskRequest;
pub use response::{AskResponse, NO_RESPONSE_PLACEHOLDER};
pub use table::{render_cell, TablePreview, TableRow};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize optional answer text that may arrive as a string,
/// a number, a boolean or `null`.
pub(crate) fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(TextVisitor)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_lenient_text")]
        value: Option<String>,
    }

    #[test]
    fn test_lenient_text_accepts_string() {
        let parsed: Wrapper = serde_json::from_str(r#"{"value": "hello"}"#).unwrap();
        assert_eq!(parsed.value.as_deref(), Some("hello"));
    }

    #[test]
    fn test_lenient_text_accepts_numbers_and_bools() {
        let parsed: Wrapper = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(parsed.value.as_deref(), Some("42"));
        let parsed: Wrapper = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert_eq!(parsed.value.as_deref(), Some("true"));
    }

    #[test]
    fn test_lenient_text_null_and_missing() {
        let parsed: Wrapper = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(parsed.value, None);
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_lenient_text_rejects_objects() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"value": {"a": 1}}"#);
        assert!(result.is_err());
    }
}
