//! Format-1 adapter: flat records with a `/`-joined location path.
//!
//! ```json
//! {"deviceID": "d1", "deviceType": "sensor", "timestamp": 1000,
//!  "location": "US/NYC/A1/F1/S1", "operationStatus": "OK", "temp": 21.5}
//! ```

use serde_json::{json, Map, Value};

use crate::error::{json_kind, NormalizeError, Result};
use crate::types::{CanonicalRecord, Location};

/// Convert a Format-1 record into its canonical form.
///
/// `deviceID`, `deviceType` and `timestamp` pass through untouched (the
/// timestamp is already epoch milliseconds); missing ones become `null`.
pub fn convert(record: &Value) -> Result<CanonicalRecord> {
    let fields = super::as_object(record)?;
    let location = location(fields)?;

    Ok(CanonicalRecord {
        device_id: super::field(fields, "deviceID"),
        device_type: super::field(fields, "deviceType"),
        timestamp: super::field(fields, "timestamp"),
        location,
        data: json!({
            "status": super::field(fields, "operationStatus"),
            "temperature": super::field(fields, "temp"),
        }),
    })
}

fn location(fields: &Map<String, Value>) -> Result<Location> {
    match fields.get("location") {
        Some(Value::String(path)) => Location::from_path(path),
        None | Some(Value::Null) => Err(NormalizeError::MalformedLocation {
            reason: "location is missing".to_string(),
        }),
        Some(other) => Err(NormalizeError::MalformedLocation {
            reason: format!("expected a string, found {}", json_kind(other)),
        }),
    }
}
