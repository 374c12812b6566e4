//! CLI entry point for batch spiral traversal of grid files

use clap::Parser;
use spiralgrid::io::cli::{Cli, FileProcessor};

fn main() -> spiralgrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
