//! Orchestrators, one per script.
//!
//! Each job resolves what it needs up front (a missing field definition fails
//! the run), fetches its records, then mutates them one at a time in fetch
//! order. Per-record failures are logged and counted; they never stop the batch.

pub mod clear_birthdays;
pub mod delete_field_data;
pub mod delete_people;
pub mod episode;
pub mod field_report;
pub mod parse_pickups;

use crate::error::Result;
use crate::planning_center::{BatchReport, Fetched};

/// Count one mutation outcome into `report`.
fn tally(report: &mut BatchReport, action: &str, id: &str, result: Result<()>) {
    match result {
        Ok(()) => {
            report.succeeded += 1;
            tracing::info!("{} {}", action, id);
        }
        Err(e) => {
            report.failed += 1;
            tracing::warn!("Failed: {} {}: {}", action, id, e);
        }
    }
}

/// Warn when a job is about to act on a partial record list.
fn warn_if_truncated<T>(fetched: &Fetched<T>, what: &str) {
    if !fetched.is_complete() {
        tracing::warn!(
            "Only {} {} were fetched before paging stopped; the rest will not be processed",
            fetched.len(),
            what
        );
    }
}
