//! CLI entry point for the kite/dart pattern generator

use clap::Parser;
use pentile::io::cli::{Cli, GenerationRunner};

fn main() -> pentile::Result<()> {
    let cli = Cli::parse();
    let runner = GenerationRunner::new(cli);
    runner.run()
}
