use anyhow::Result;
use clap::Parser;
use hypertalk_parser::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
