//! Shape detector: picks the adapter for a raw record.

use serde_json::Value;

use crate::types::SourceFormat;

/// Key whose presence marks a Format-2 record.
pub const FORMAT2_DISCRIMINANT: &str = "device";

/// Classify a raw record by probing a single field.
///
/// A non-null `device` value means Format 2; anything else, including a
/// record that is not a JSON object at all, is treated as Format 1 and left
/// for that adapter to reject.
pub fn detect(record: &Value) -> SourceFormat {
    match record.get(FORMAT2_DISCRIMINANT) {
        Some(device) if !device.is_null() => SourceFormat::Format2,
        _ => SourceFormat::Format1,
    }
}
