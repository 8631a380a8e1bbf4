//! Create an episode on the first publishing channel.
//!
//! Usage: `cargo run --bin create-episode [-- --title "Easter Sunday"]`

use anyhow::{Context, Result};
use clap::Parser;
use pco_tools::config::Config;
use pco_tools::jobs::episode;
use pco_tools::planning_center::PlanningCenterClient;

/// Create a Planning Center Publishing episode
#[derive(Parser, Debug)]
#[command(name = "create-episode", version)]
struct Args {
    /// Episode title
    #[arg(long, default_value = episode::DEFAULT_TITLE)]
    title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    pco_tools::logging::init();
    let args = Args::parse();

    let config = Config::load().context("Failed to load config")?;
    let client = PlanningCenterClient::new(&config);

    let created = episode::run(&client, &args.title).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}
