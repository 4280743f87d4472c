//! CLI entry point for box-counting fractal dimension estimation

use clap::Parser;
use crackdim::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> crackdim::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
