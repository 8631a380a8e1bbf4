//! Set every person's birthday to null.
//!
//! Usage: `cargo run --bin clear-birthdays`

use anyhow::{Context, Result};
use clap::Parser;
use pco_tools::config::Config;
use pco_tools::confirm::TerminalPrompt;
use pco_tools::jobs::clear_birthdays;
use pco_tools::planning_center::PlanningCenterClient;

/// Clear all birthdays in Planning Center People (irreversible)
#[derive(Parser, Debug)]
#[command(name = "clear-birthdays", version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    pco_tools::logging::init();
    Args::parse();

    let config = Config::load().context("Failed to load config")?;
    let client = PlanningCenterClient::new(&config);

    let report = clear_birthdays::run(&client, &mut TerminalPrompt).await?;
    println!("Birthdays: {report}");
    Ok(())
}
