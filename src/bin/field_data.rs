//! List the stored values of a field definition, or count people.
//!
//! Usage: `cargo run --bin field-data [-- --field "Medical Notes"]`

use anyhow::{Context, Result};
use clap::Parser;
use pco_tools::config::Config;
use pco_tools::jobs::field_report::{self, FieldReport};
use pco_tools::planning_center::PlanningCenterClient;

/// Query Planning Center People data
#[derive(Parser, Debug)]
#[command(name = "field-data", version)]
struct Args {
    /// Name of the field definition to query (e.g. 'Grade' or 'Medical Notes')
    #[arg(long)]
    field: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    pco_tools::logging::init();
    let args = Args::parse();

    let config = Config::load().context("Failed to load config")?;
    let client = PlanningCenterClient::new(&config);

    match field_report::run(&client, args.field.as_deref()).await? {
        FieldReport::People(ids) => {
            println!("Fetched {} people IDs.", ids.len());
            if !ids.is_complete() {
                println!("(incomplete: paging stopped early)");
            }
        }
        FieldReport::FieldData { name, definition, data } => {
            println!("Data for field '{name}' ({definition}):");
            for entry in &data.records {
                println!(
                    "Person ID: {}, Value: {}, Field Data ID: {}",
                    entry.person_id, entry.value, entry.id
                );
            }
            if !data.is_complete() {
                println!("(incomplete: paging stopped early)");
            }
        }
    }

    Ok(())
}
