//! Records from a file on disk.

use std::path::PathBuf;

use crate::{parse_records, RecordSource, Result, SourceError};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read_records(&mut self) -> Result<Vec<serde_json::Value>> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            source_name: self.name(),
            source,
        })?;
        let records = parse_records(&text).map_err(|source| SourceError::Json {
            source_name: self.name(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "read records from file");
        Ok(records)
    }
}
