//! devnorm-core: device telemetry normalization.
//!
//! Raw telemetry records arrive in one of two JSON shapes. This crate turns
//! either shape into a single [`CanonicalRecord`].
//!
//! # Architecture
//!
//! ```text
//!              ┌──► format1::convert ──┐
//! detect ──────┤                       ├──► CanonicalRecord | NormalizeError
//!              └──► format2::convert ──┘
//!                        │
//!                 ConversionObserver (tracing side channel)
//! ```
//!
//! The adapters are pure functions. [`Normalizer`] runs the detector, calls
//! the matching adapter and reports each invocation to its observer.

pub mod adapter;
pub mod config;
pub mod detect;
pub mod error;
pub mod normalizer;
pub mod observer;
pub mod timestamp;
pub mod types;

pub use detect::detect;
pub use error::{FailureKind, NormalizeError, Result};
pub use normalizer::{normalize, Normalizer};
pub use observer::{ConversionEvent, ConversionObserver, NoopObserver, TracingObserver};
pub use types::{CanonicalRecord, Location, SourceFormat};
