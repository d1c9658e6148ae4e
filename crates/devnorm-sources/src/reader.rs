//! Records from any [`Read`] implementor, including stdin.

use std::io::Read;

use crate::{parse_records, RecordSource, Result, SourceError};

pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl ReaderSource<std::io::Stdin> {
    pub fn stdin() -> Self {
        Self::new("<stdin>", std::io::stdin())
    }
}

impl<R: Read> RecordSource for ReaderSource<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_records(&mut self) -> Result<Vec<serde_json::Value>> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .map_err(|source| SourceError::Io {
                source_name: self.name.clone(),
                source,
            })?;
        let records = parse_records(&text).map_err(|source| SourceError::Json {
            source_name: self.name.clone(),
            source,
        })?;
        tracing::debug!(source = %self.name, count = records.len(), "read records");
        Ok(records)
    }
}
