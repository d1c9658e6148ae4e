//! Splitting a JSON document into raw records.

use serde_json::Value;

/// Parse `text` into records.
///
/// - whitespace only: no records
/// - top-level array: one record per element
/// - anything else: a stream of concatenated or newline-delimited values,
///   one record each
///
/// Records are not checked for shape; a non-object element is handed to the
/// normalizer, which rejects it.
pub fn parse_records(text: &str) -> serde_json::Result<Vec<Value>> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(trimmed)? {
            Value::Array(records) => Ok(records),
            other => Ok(vec![other]),
        };
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<Value>()
        .collect()
}
