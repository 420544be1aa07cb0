//! CLI entry point for raster transforms and pattern generation

use clap::Parser;
use rasterops::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> rasterops::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.run()
}
