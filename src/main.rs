use anyhow::Result;
use clap::Parser;

use pdfbind::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    pdfbind::run(&cli)?;
    Ok(())
}
