//! Diagnostics side channel for adapter invocations.
//!
//! Every call through [`Normalizer`](crate::Normalizer) reports a
//! [`ConversionEvent::Started`] followed by either `Converted` or `Failed`.
//! Observers never influence the conversion result.

use serde_json::Value;

use crate::error::NormalizeError;
use crate::types::{CanonicalRecord, SourceFormat};

/// One step of a single adapter invocation.
#[derive(Debug, Clone, Copy)]
pub enum ConversionEvent<'a> {
    Started {
        format: SourceFormat,
        input: &'a Value,
    },
    Converted {
        format: SourceFormat,
        input: &'a Value,
        output: &'a CanonicalRecord,
    },
    Failed {
        format: SourceFormat,
        input: &'a Value,
        error: &'a NormalizeError,
    },
}

impl ConversionEvent<'_> {
    pub fn format(&self) -> SourceFormat {
        match self {
            ConversionEvent::Started { format, .. }
            | ConversionEvent::Converted { format, .. }
            | ConversionEvent::Failed { format, .. } => *format,
        }
    }
}

/// Receives [`ConversionEvent`]s. Implemented for any `Fn(&ConversionEvent)`.
pub trait ConversionObserver {
    fn observe(&self, event: &ConversionEvent<'_>);
}

impl<F> ConversionObserver for F
where
    F: Fn(&ConversionEvent<'_>),
{
    fn observe(&self, event: &ConversionEvent<'_>) {
        self(event)
    }
}

/// Emits each event through `tracing`: starts and successes at `info` with
/// the full payloads, failures at `error` with the cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn observe(&self, event: &ConversionEvent<'_>) {
        match event {
            ConversionEvent::Started { format, input } => {
                tracing::info!(%format, %input, "starting conversion");
            }
            ConversionEvent::Converted { format, input, output } => {
                tracing::info!(%format, %input, %output, "converted record");
            }
            ConversionEvent::Failed { format, error, .. } => {
                tracing::error!(%format, %error, kind = %error.kind(), "conversion failed");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ConversionObserver for NoopObserver {
    fn observe(&self, _event: &ConversionEvent<'_>) {}
}
