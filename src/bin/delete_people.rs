//! Delete every person record (or a single one).
//!
//! Usage: `cargo run --bin delete-people [-- --skip 123 --skip 456]`
//!        `cargo run --bin delete-people -- --person 123`

use anyhow::{Context, Result};
use clap::Parser;
use pco_tools::config::Config;
use pco_tools::confirm::TerminalPrompt;
use pco_tools::jobs::delete_people::{self, DeletePeopleOptions};
use pco_tools::planning_center::PlanningCenterClient;

/// Delete people from Planning Center (irreversible)
#[derive(Parser, Debug)]
#[command(name = "delete-people", version)]
struct Args {
    /// Person ID to leave untouched (repeatable)
    #[arg(long, value_name = "ID")]
    skip: Vec<String>,

    /// Delete only this person
    #[arg(long, value_name = "ID", conflicts_with = "skip")]
    person: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    pco_tools::logging::init();
    let args = Args::parse();

    let config = Config::load().context("Failed to load config")?;
    let client = PlanningCenterClient::new(&config);
    let options = DeletePeopleOptions {
        skip: args.skip,
        person: args.person,
    };

    let report = delete_people::run(&client, &options, &mut TerminalPrompt).await?;
    println!("Deletion: {report}");
    Ok(())
}
