//! Test builders: ergonomic constructors for raw Format-1 and Format-2
//! records.
//!
//! These builders are designed for readability in tests, not for production
//! use. Every builder starts from a complete, valid record; tests override
//! or remove the fields they care about.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Format1Builder
// ---------------------------------------------------------------------------

/// Fluent builder for flat Format-1 records.
///
/// ```rust
/// let raw = Format1Builder::new("d1")
///     .location("US/NYC/A1/F1/S1")
///     .temp(21.5)
///     .build();
/// ```
pub struct Format1Builder {
    fields: Map<String, Value>,
}

impl Format1Builder {
    pub fn new(device_id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("deviceID".into(), device_id.into());
        fields.insert("deviceType".into(), "sensor".into());
        fields.insert("timestamp".into(), 1000.into());
        fields.insert("location".into(), "US/NYC/A1/F1/S1".into());
        fields.insert("operationStatus".into(), "OK".into());
        fields.insert("temp".into(), json!(21.5));
        Self { fields }
    }

    pub fn location(self, location: impl Into<Value>) -> Self {
        self.field("location", location)
    }

    pub fn timestamp(self, timestamp: impl Into<Value>) -> Self {
        self.field("timestamp", timestamp)
    }

    pub fn status(self, status: impl Into<Value>) -> Self {
        self.field("operationStatus", status)
    }

    pub fn temp(self, temp: impl Into<Value>) -> Self {
        self.field("temp", temp)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Format2Builder
// ---------------------------------------------------------------------------

/// Fluent builder for nested Format-2 records.
pub struct Format2Builder {
    fields: Map<String, Value>,
}

impl Format2Builder {
    pub fn new(device_id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("device".into(), json!({"id": device_id, "type": "sensor"}));
        fields.insert("timestamp".into(), "2021-01-01T00:00:00Z".into());
        for (key, value) in [
            ("country", "US"),
            ("city", "NYC"),
            ("area", "A1"),
            ("factory", "F1"),
            ("section", "S1"),
        ] {
            fields.insert(key.into(), value.into());
        }
        fields.insert("data".into(), json!({"status": "OK", "temperature": 21.5}));
        Self { fields }
    }

    pub fn device(self, device: impl Into<Value>) -> Self {
        self.field("device", device)
    }

    pub fn timestamp(self, timestamp: impl Into<Value>) -> Self {
        self.field("timestamp", timestamp)
    }

    pub fn data(self, data: impl Into<Value>) -> Self {
        self.field("data", data)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// `n` raw records alternating Format 1 and Format 2, all valid.
pub fn build_corpus(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let id = format!("device-{i}");
            if i % 2 == 0 {
                Format1Builder::new(&id).timestamp(1_609_459_200_000_i64 + i as i64).build()
            } else {
                Format2Builder::new(&id).build()
            }
        })
        .collect()
}
