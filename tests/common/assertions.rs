//! Domain-specific assertion macros for devnorm harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! canonical-record invariant was violated.

use devnorm_core::CanonicalRecord;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Failure assertions
// ---------------------------------------------------------------------------

/// Assert that a normalization result is a failure of the given kind.
///
/// ```rust
/// assert_failure_kind!(normalize(&raw), FailureKind::MalformedLocation);
/// ```
#[macro_export]
macro_rules! assert_failure_kind {
    ($result:expr, $kind:expr) => {{
        let result: devnorm_core::Result<devnorm_core::CanonicalRecord> = $result;
        let expected: devnorm_core::FailureKind = $kind;
        match result {
            Err(err) if err.kind() == expected => {}
            Err(err) => panic!(
                "assert_failure_kind! failed:\n  expected: {:?}\n  actual:   {:?} ({})",
                expected,
                err.kind(),
                err
            ),
            Ok(record) => panic!(
                "assert_failure_kind! failed: expected {:?}, got a record:\n  {}",
                expected, record
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Canonical record assertions
// ---------------------------------------------------------------------------

/// Assert that a record serializes to exactly `expected`.
///
/// ```rust
/// assert_canonical!(record, json!({"deviceID": "d1", ...}));
/// ```
#[macro_export]
macro_rules! assert_canonical {
    ($record:expr, $expected:expr) => {{
        let record: &devnorm_core::CanonicalRecord = &$record;
        let actual = serde_json::to_value(record).expect("canonical record serializes");
        let expected: serde_json::Value = $expected;
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

/// Assert the shape every canonical record shares regardless of source
/// format: the five top-level keys and a five-key `location` mapping.
pub fn assert_canonical_shape(record: &CanonicalRecord) {
    let value = serde_json::to_value(record).expect("canonical record serializes");
    pretty_assertions::assert_eq!(
        sorted_keys(&value),
        ["data", "deviceID", "deviceType", "location", "timestamp"],
        "top-level keys of {}",
        value
    );
    pretty_assertions::assert_eq!(
        sorted_keys(&value["location"]),
        ["area", "city", "country", "factory", "section"],
        "location keys of {}",
        value
    );
}

fn sorted_keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    keys
}
