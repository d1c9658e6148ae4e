//! devnorm: device telemetry normalizer.
//!
//! Reads raw telemetry records in either supported shape and writes them
//! back out in the canonical schema. The conversion itself lives in
//! `devnorm-core`; record loading lives in `devnorm-sources`.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► Normalizer ──► JSON lines on stdout
//! (file, stdin)    (detect + adapters)
//! ```
//!
//! Everything runs synchronously on one thread, one record at a time.

pub mod pipeline;
