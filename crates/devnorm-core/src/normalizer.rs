//! Normalizer: detects a raw record's shape and runs the matching adapter.
//!
//! [`Normalizer`] wraps the pure adapters in [`crate::adapter`] with
//! [`ConversionObserver`] notifications. It holds no mutable state, so one
//! instance can serve any number of records (and threads, if its observer is
//! `Sync`).

use serde_json::Value;

use crate::adapter::{format1, format2};
use crate::detect::detect;
use crate::error::Result;
use crate::observer::{ConversionEvent, ConversionObserver, TracingObserver};
use crate::types::{CanonicalRecord, SourceFormat};

/// Dispatcher over the two format adapters.
#[derive(Debug, Clone, Default)]
pub struct Normalizer<O = TracingObserver> {
    observer: O,
}

impl Normalizer<TracingObserver> {
    /// A normalizer that reports through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ConversionObserver> Normalizer<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Detect the record's shape and convert it. The adapter's result is
    /// returned unchanged.
    pub fn normalize(&self, record: &Value) -> Result<CanonicalRecord> {
        match detect(record) {
            SourceFormat::Format1 => self.convert_format1(record),
            SourceFormat::Format2 => self.convert_format2(record),
        }
    }

    pub fn convert_format1(&self, record: &Value) -> Result<CanonicalRecord> {
        self.observed(SourceFormat::Format1, record, format1::convert)
    }

    pub fn convert_format2(&self, record: &Value) -> Result<CanonicalRecord> {
        self.observed(SourceFormat::Format2, record, format2::convert)
    }

    fn observed(
        &self,
        format: SourceFormat,
        input: &Value,
        adapter: fn(&Value) -> Result<CanonicalRecord>,
    ) -> Result<CanonicalRecord> {
        self.observer.observe(&ConversionEvent::Started { format, input });
        let result = adapter(input);
        match &result {
            Ok(output) => self.observer.observe(&ConversionEvent::Converted {
                format,
                input,
                output,
            }),
            Err(error) => self.observer.observe(&ConversionEvent::Failed {
                format,
                input,
                error,
            }),
        }
        result
    }
}

/// Normalize one record, reporting through `tracing`.
pub fn normalize(record: &Value) -> Result<CanonicalRecord> {
    Normalizer::new().normalize(record)
}
