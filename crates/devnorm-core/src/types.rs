//! Core types for devnorm-core.
//!
//! This module defines the canonical output shape shared by both format
//! adapters: the [`CanonicalRecord`], its nested [`Location`], and the
//! [`SourceFormat`] discriminant produced by the shape detector.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NormalizeError, Result};

/// Separator between the five components of a Format-1 location path.
pub const LOCATION_SEPARATOR: &str = "/";

/// A normalised telemetry record produced by either adapter.
///
/// Pass-through fields stay as [`Value`] so that a field missing from the
/// raw record surfaces as JSON `null` instead of failing the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Device identifier (`deviceID` in Format 1, `device.id` in Format 2).
    #[serde(rename = "deviceID")]
    pub device_id: Value,
    /// Device type (`deviceType` in Format 1, `device.type` in Format 2).
    #[serde(rename = "deviceType")]
    pub device_type: Value,
    /// Epoch milliseconds. Format 1 copies its value through untouched;
    /// Format 2 always produces an integer.
    pub timestamp: Value,
    pub location: Location,
    /// Measurement payload. Format 1 builds `{status, temperature}`;
    /// Format 2 passes its `data` mapping through verbatim, so the keys
    /// differ between sources.
    pub data: Value,
}

impl std::fmt::Display for CanonicalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

/// Where a device sits, from country down to factory section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: Value,
    pub city: Value,
    pub area: Value,
    pub factory: Value,
    pub section: Value,
}

impl Location {
    /// Split a `country/city/area/factory/section` path into its components.
    ///
    /// Exactly five components are required; empty components are kept as
    /// empty strings.
    pub fn from_path(path: &str) -> Result<Self> {
        let parts: Vec<&str> = path.split(LOCATION_SEPARATOR).collect();
        match parts.as_slice() {
            [country, city, area, factory, section] => Ok(Self {
                country: Value::from(*country),
                city: Value::from(*city),
                area: Value::from(*area),
                factory: Value::from(*factory),
                section: Value::from(*section),
            }),
            _ => Err(NormalizeError::MalformedLocation {
                reason: format!(
                    "expected 5 '{LOCATION_SEPARATOR}'-separated components in {path:?}, found {}",
                    parts.len()
                ),
            }),
        }
    }

    /// Join the components back into a Format-1 path. Returns `None` if any
    /// component is not a string.
    pub fn to_path(&self) -> Option<String> {
        let parts = [
            self.country.as_str()?,
            self.city.as_str()?,
            self.area.as_str()?,
            self.factory.as_str()?,
            self.section.as_str()?,
        ];
        Some(parts.join(LOCATION_SEPARATOR))
    }
}

/// Which raw shape a record arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Flat record with a `/`-joined `location` string and epoch-ms timestamp.
    Format1,
    /// Nested record with a `device` mapping and an ISO-8601 timestamp.
    Format2,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Format1 => write!(f, "format-1"),
            SourceFormat::Format2 => write!(f, "format-2"),
        }
    }
}
