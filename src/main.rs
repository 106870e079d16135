//! CLI entry point for the annealed snow renderer

use clap::Parser;
use snowdrift::io::cli::{Cli, CommandProcessor};

fn main() -> snowdrift::Result<()> {
    let cli = Cli::parse();
    let processor = CommandProcessor::new(cli);
    processor.process()
}
