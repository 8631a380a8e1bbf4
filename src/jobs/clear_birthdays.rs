//! Blank out every person's birthday.

use crate::confirm::Confirmation;
use crate::error::Result;
use crate::planning_center::{BatchReport, PlanningCenterClient, Transport};

use super::{tally, warn_if_truncated};

/// Set every person's birthday to null after confirmation.
pub async fn run<T, C>(client: &PlanningCenterClient<T>, confirmation: &mut C) -> Result<BatchReport>
where
    T: Transport,
    C: Confirmation + Send,
{
    let fetched = client.people_ids().await;
    warn_if_truncated(&fetched, "people");
    let total = fetched.len();
    tracing::info!("Found {} people to update birthdays", total);

    let mut report = BatchReport {
        incomplete: !fetched.is_complete(),
        ..BatchReport::default()
    };
    if total == 0 {
        return Ok(report);
    }

    let prompt = format!("Clear the birthday of all {total} people? This is irreversible!");
    if !confirmation.confirm(&prompt)? {
        tracing::info!("Aborted");
        return Ok(BatchReport::aborted());
    }

    for id in &fetched.records {
        let result = client.clear_birthday(id).await;
        tally(&mut report, "Cleared birthday for person", id, result);
    }

    Ok(report)
}
