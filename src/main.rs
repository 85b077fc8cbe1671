//! CLI entry point for the rhombic tiling enumerator

use clap::Parser;
use rhombic_tiling::io::cli::{Cli, RunProcessor};
use rhombic_tiling::io::logging::init_logging;

fn main() -> rhombic_tiling::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    RunProcessor::new(cli).process()?;
    Ok(())
}
