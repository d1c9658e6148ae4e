//! Pipeline: drives record sources through the normalizer and writes the
//! canonical records out as JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use devnorm_core::config::Config;
use devnorm_core::{CanonicalRecord, ConversionObserver, Normalizer};
use devnorm_sources::{FileSource, ReaderSource, RecordSource};

/// Path argument that stands for standard input.
pub const STDIN_ARG: &str = "-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Pretty-print each record instead of writing one compact line.
    pub pretty: bool,
    /// Stop at the first record that fails to normalize.
    pub fail_fast: bool,
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            pretty: config.output.pretty,
            fail_fast: config.pipeline.fail_fast,
        }
    }
}

/// Outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

/// Build sources for the given CLI paths. No paths, or `-`, means stdin.
pub fn sources_from_paths(paths: &[PathBuf]) -> Vec<Box<dyn RecordSource>> {
    if paths.is_empty() {
        return vec![Box::new(ReaderSource::stdin())];
    }
    paths
        .iter()
        .map(|path| -> Box<dyn RecordSource> {
            if path.as_os_str() == STDIN_ARG {
                Box::new(ReaderSource::stdin())
            } else {
                Box::new(FileSource::new(path))
            }
        })
        .collect()
}

/// Normalize every record from `sources`, in order, writing successes to
/// `out`. Failed records are skipped and counted unless
/// [`PipelineOptions::fail_fast`] is set.
pub fn run<O, W>(
    normalizer: &Normalizer<O>,
    sources: &mut [Box<dyn RecordSource>],
    options: &PipelineOptions,
    mut out: W,
) -> anyhow::Result<Summary>
where
    O: ConversionObserver,
    W: Write,
{
    let mut summary = Summary::default();

    for source in sources.iter_mut() {
        let name = source.name();
        let records = source.read_records()?;
        tracing::debug!(source = %name, count = records.len(), "normalizing source");

        for (index, record) in records.iter().enumerate() {
            match normalizer.normalize(record) {
                Ok(canonical) => {
                    write_record(&mut out, &canonical, options.pretty)
                        .with_context(|| format!("failed to write record {index} of {name}"))?;
                    summary.converted += 1;
                }
                Err(err) => {
                    summary.failed += 1;
                    if options.fail_fast {
                        return Err(anyhow::Error::new(err)
                            .context(format!("record {index} of {name} failed to normalize")));
                    }
                    tracing::warn!(source = %name, index, error = %err, "skipping record");
                }
            }
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(summary)
}

fn write_record<W: Write>(out: &mut W, record: &CanonicalRecord, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, record)?;
    } else {
        serde_json::to_writer(&mut *out, record)?;
    }
    writeln!(out)?;
    Ok(())
}
