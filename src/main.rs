use anyhow::Result;
use clap::Parser;
use designbook::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    designbook::run(cli)
}
