//! devnorm-sources: raw record sources for devnorm.
//!
//! Each source reads one JSON document and splits it into raw records for
//! the normalizer. A document may be a single object, an array of objects,
//! or newline-delimited JSON.

mod error;
pub mod file;
pub mod parse;
pub mod reader;

pub use error::{Result, SourceError};
pub use file::FileSource;
pub use parse::parse_records;
pub use reader::ReaderSource;

/// Trait implemented by each raw record source.
pub trait RecordSource {
    /// Human-readable name used in logs and errors (a path, `<stdin>`, …).
    fn name(&self) -> String;

    /// Read every record the source holds, in document order.
    fn read_records(&mut self) -> Result<Vec<serde_json::Value>>;
}
