//! Reshape a membership export into a People import CSV.
//!
//! Usage: `cargo run --bin import-csv [-- --input export.csv --output import.csv --year 2025]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use pco_tools::import;

/// Convert a membership export to the People import format
#[derive(Parser, Debug)]
#[command(name = "import-csv", version)]
struct Args {
    /// Export file to read
    #[arg(long, default_value = import::DEFAULT_INPUT)]
    input: PathBuf,

    /// Import file to write
    #[arg(long, default_value = import::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Year ages are counted back from when deriving birth years (default: this year)
    #[arg(long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    pco_tools::logging::init();
    let args = Args::parse();
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());

    let rows = import::run(&args.input, &args.output, year)
        .with_context(|| format!("Failed to transform {}", args.input.display()))?;
    println!("CSV transformation complete. {rows} rows saved to {}", args.output.display());
    Ok(())
}
