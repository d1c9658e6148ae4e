//! Sample raw records and their expected canonical forms.
//!
//! The `SCENARIO_*` constants are the two reference conversions. The files
//! under `tests/fixtures/` are a second pair that must converge on the same
//! canonical record; load them with [`load_fixture`] inside each test.

use serde_json::Value;
use std::path::PathBuf;

/// Format-1 reference input.
pub const SCENARIO_FORMAT1_INPUT: &str = r#"{"deviceID":"d1","deviceType":"sensor","timestamp":1000,"location":"US/NYC/A1/F1/S1","operationStatus":"OK","temp":21.5}"#;

/// Canonical form of [`SCENARIO_FORMAT1_INPUT`].
pub const SCENARIO_FORMAT1_OUTPUT: &str = r#"{"deviceID":"d1","deviceType":"sensor","timestamp":1000,"location":{"country":"US","city":"NYC","area":"A1","factory":"F1","section":"S1"},"data":{"status":"OK","temperature":21.5}}"#;

/// Format-2 reference input.
pub const SCENARIO_FORMAT2_INPUT: &str = r#"{"device":{"id":"d2","type":"sensor"},"timestamp":"2021-01-01T00:00:00Z","country":"US","city":"NYC","area":"A1","factory":"F1","section":"S1","data":{"status":"OK","temperature":21.5}}"#;

/// Canonical form of [`SCENARIO_FORMAT2_INPUT`].
pub const SCENARIO_FORMAT2_OUTPUT: &str = r#"{"deviceID":"d2","deviceType":"sensor","timestamp":1609459200000,"location":{"country":"US","city":"NYC","area":"A1","factory":"F1","section":"S1"},"data":{"status":"OK","temperature":21.5}}"#;

/// Malformed records, one per failure kind.
pub const MALFORMED_LOCATION: &str = r#"{"deviceID":"d3","deviceType":"sensor","timestamp":2000,"location":"only/two/parts","operationStatus":"OK","temp":19.0}"#;
pub const MALFORMED_TIMESTAMP: &str = r#"{"device":{"id":"d4","type":"valve"},"timestamp":"not-a-timestamp","country":"US","city":"NYC","area":"A1","factory":"F1","section":"S2","data":{"open":true}}"#;
pub const ADAPTER_ERROR: &str = r#"{"device":["d5","valve"],"timestamp":"2021-01-01T00:00:00Z"}"#;

/// Parse one of the string constants above.
pub fn json(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture constant must be valid JSON")
}

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read and parse a JSON fixture file.
pub fn load_fixture(name: &str) -> Value {
    let path = fixture_path(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("fixture {} is not valid JSON: {e}", path.display()))
}
