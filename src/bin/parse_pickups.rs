//! Rewrite authorized pickup lists as `name;email;phone|...` values.
//!
//! Usage: `cargo run --bin parse-pickups [-- --in-place]`

use anyhow::{Context, Result};
use clap::Parser;
use pco_tools::config::Config;
use pco_tools::constants::fields;
use pco_tools::jobs::parse_pickups::{self, PickupOptions};
use pco_tools::planning_center::PlanningCenterClient;

/// Enrich authorized pickup names with email and phone
#[derive(Parser, Debug)]
#[command(name = "parse-pickups", version)]
struct Args {
    /// Field definition holding the comma-separated names
    #[arg(long, default_value = fields::AUTHORIZED_PICKUPS)]
    source: String,

    /// Field definition that receives the enriched values
    #[arg(long, default_value = fields::AUTHORIZED_PICKUPS_PARSED)]
    target: String,

    /// Overwrite the source values instead of writing the target field
    #[arg(long)]
    in_place: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    pco_tools::logging::init();
    let args = Args::parse();

    let config = Config::load().context("Failed to load config")?;
    let client = PlanningCenterClient::new(&config);
    let options = PickupOptions {
        source_field: args.source,
        target_field: args.target,
        in_place: args.in_place,
    };

    let report = parse_pickups::run(&client, &options).await?;
    println!("Authorized pickups: {report}");
    Ok(())
}
