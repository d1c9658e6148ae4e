use thiserror::Error;

/// Why a raw record could not be converted.
///
/// A failed conversion never produces a partial [`CanonicalRecord`](crate::CanonicalRecord).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// Format-1 `location` is missing or does not split into five parts.
    #[error("malformed location: {reason}")]
    MalformedLocation { reason: String },

    /// Format-2 `timestamp` is missing, not a string, or not ISO-8601.
    #[error("malformed timestamp {value}: {reason}")]
    MalformedTimestamp { value: String, reason: String },

    /// Any other extraction failure, e.g. a mapping was expected but
    /// something else was found.
    #[error("adapter error at `{field}`: {reason}")]
    Adapter { field: String, reason: String },
}

/// Payload-free discriminant of [`NormalizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MalformedLocation,
    MalformedTimestamp,
    AdapterError,
}

impl NormalizeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            NormalizeError::MalformedLocation { .. } => FailureKind::MalformedLocation,
            NormalizeError::MalformedTimestamp { .. } => FailureKind::MalformedTimestamp,
            NormalizeError::Adapter { .. } => FailureKind::AdapterError,
        }
    }

    pub(crate) fn adapter(field: impl Into<String>, reason: impl Into<String>) -> Self {
        NormalizeError::Adapter {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::MalformedLocation => write!(f, "MalformedLocation"),
            FailureKind::MalformedTimestamp => write!(f, "MalformedTimestamp"),
            FailureKind::AdapterError => write!(f, "AdapterError"),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Short JSON type name used in error reasons.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
