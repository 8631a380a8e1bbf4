//! Delete every stored value of one field definition.
//!
//! Usage: `cargo run --bin delete-field-data -- --field Grade`

use anyhow::{Context, Result};
use clap::Parser;
use pco_tools::config::Config;
use pco_tools::confirm::TerminalPrompt;
use pco_tools::jobs::delete_field_data;
use pco_tools::planning_center::PlanningCenterClient;

/// Delete all data of a custom field (irreversible)
#[derive(Parser, Debug)]
#[command(name = "delete-field-data", version)]
struct Args {
    /// Name of the field definition to clear (e.g. 'Grade' or 'Medical Notes')
    #[arg(long)]
    field: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    pco_tools::logging::init();
    let args = Args::parse();

    let config = Config::load().context("Failed to load config")?;
    let client = PlanningCenterClient::new(&config);

    let report = delete_field_data::run(&client, &args.field, &mut TerminalPrompt).await?;
    println!("Field '{}': {report}", args.field);
    Ok(())
}
