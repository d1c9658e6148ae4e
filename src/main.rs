use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use devnorm::pipeline::{self, PipelineOptions};
use devnorm_core::config::Config;
use devnorm_core::Normalizer;

#[derive(Parser)]
#[command(name = "devnorm", about = "Normalize device telemetry records into the canonical schema")]
struct Cli {
    /// JSON files to read (object, array, or one record per line). Reads
    /// stdin when none are given or for `-`.
    inputs: Vec<PathBuf>,

    /// Pretty-print canonical records.
    #[arg(long)]
    pretty: bool,

    /// Stop at the first record that fails to normalize.
    #[arg(long)]
    fail_fast: bool,

    /// Config file to use instead of ~/.config/devnorm/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = if cli.debug { "debug" } else { config.logging.filter.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let mut options = PipelineOptions::from(&config);
    options.pretty |= cli.pretty;
    options.fail_fast |= cli.fail_fast;

    let mut sources = pipeline::sources_from_paths(&cli.inputs);
    let stdout = std::io::stdout();
    let summary = pipeline::run(&Normalizer::new(), &mut sources, &options, BufWriter::new(stdout.lock()))?;
    tracing::info!(converted = summary.converted, failed = summary.failed, "normalization finished");

    if summary.failed > 0 {
        anyhow::bail!("{} of {} records failed to normalize", summary.failed, summary.total());
    }
    Ok(())
}
