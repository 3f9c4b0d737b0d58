//! Item Codec
//!
//! The persistence slot stores items as a JSON array of strings.

use serde_json::Value;

use crate::error::{ListError, ListResult};

/// Serialize items in display order
pub fn encode_items(items: &[String]) -> String {
    // A list of strings always serializes.
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a stored value back into items
///
/// `null` decodes to an empty list. Anything other than an array of strings
/// is `MalformedStorage`.
pub fn decode_items(raw: &str) -> ListResult<Vec<String>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ListError::MalformedStorage(e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(values) => values
            .into_iter()
            .map(|v| match v {
                Value::String(s) => Ok(s),
                other => Err(ListError::MalformedStorage(format!(
                    "expected string, found {}",
                    other
                ))),
            })
            .collect(),
        other => Err(ListError::MalformedStorage(format!(
            "expected array, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_encode_matches_stored_format() {
        let items = vec!["Milk".to_string(), "Bread".to_string()];
        assert_eq!(encode_items(&items), r#"["Milk","Bread"]"#);
        assert_eq!(encode_items(&[]), "[]");
    }

    #[test]
    fn test_decode_preserves_order() {
        let items = decode_items(r#"["b","a","c"]"#).unwrap();
        assert_eq!(items, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_decode_escaped_text() {
        let items = decode_items(r#"["say \"hi\"","tab\there"]"#).unwrap();
        assert_eq!(items, vec!["say \"hi\"", "tab\there"]);
    }

    #[test]
    fn test_decode_null_is_empty() {
        assert!(decode_items("null").unwrap().is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case(r#"{"items":[]}"#)]
    #[case(r#"["ok", 3]"#)]
    #[case(r#""Milk""#)]
    #[case("[\"unterminated")]
    fn test_decode_rejects_malformed(#[case] raw: &str) {
        assert!(matches!(
            decode_items(raw),
            Err(ListError::MalformedStorage(_))
        ));
    }
}
