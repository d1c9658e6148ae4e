//! Format-2 adapter: nested `device` mapping, ISO-8601 timestamp, flat
//! location siblings and an opaque `data` payload.
//!
//! ```json
//! {"device": {"id": "d2", "type": "sensor"}, "timestamp": "2021-01-01T00:00:00Z",
//!  "country": "US", "city": "NYC", "area": "A1", "factory": "F1", "section": "S1",
//!  "data": {"status": "OK", "temperature": 21.5}}
//! ```

use serde_json::{Map, Value};

use crate::error::{json_kind, NormalizeError, Result};
use crate::timestamp;
use crate::types::{CanonicalRecord, Location};

/// Convert a Format-2 record into its canonical form.
///
/// The timestamp is checked first, so a record that is wrong in several
/// ways reports [`NormalizeError::MalformedTimestamp`].
pub fn convert(record: &Value) -> Result<CanonicalRecord> {
    let fields = super::as_object(record)?;
    let timestamp = timestamp::millis_from_field(fields.get("timestamp"))?;
    let (device_id, device_type) = device(fields)?;

    Ok(CanonicalRecord {
        device_id,
        device_type,
        timestamp: Value::from(timestamp),
        location: Location {
            country: super::field(fields, "country"),
            city: super::field(fields, "city"),
            area: super::field(fields, "area"),
            factory: super::field(fields, "factory"),
            section: super::field(fields, "section"),
        },
        data: super::field(fields, "data"),
    })
}

/// `(id, type)` from the nested device mapping. An absent or null device
/// yields two nulls.
fn device(fields: &Map<String, Value>) -> Result<(Value, Value)> {
    match fields.get("device") {
        None | Some(Value::Null) => Ok((Value::Null, Value::Null)),
        Some(Value::Object(device)) => Ok((super::field(device, "id"), super::field(device, "type"))),
        Some(other) => Err(NormalizeError::adapter(
            "device",
            format!("expected an object, found {}", json_kind(other)),
        )),
    }
}
