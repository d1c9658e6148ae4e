//! Format adapters: pure functions from one raw shape to [`CanonicalRecord`](crate::CanonicalRecord).

pub mod format1;
pub mod format2;

use serde_json::{Map, Value};

use crate::error::{json_kind, NormalizeError, Result};

fn as_object(record: &Value) -> Result<&Map<String, Value>> {
    record.as_object().ok_or_else(|| {
        NormalizeError::adapter(
            "record",
            format!("expected an object, found {}", json_kind(record)),
        )
    })
}

/// Cloned field value, `null` when absent.
fn field(fields: &Map<String, Value>, key: &str) -> Value {
    fields.get(key).cloned().unwrap_or(Value::Null)
}
