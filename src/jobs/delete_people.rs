//! Bulk deletion of person records.

use crate::confirm::Confirmation;
use crate::error::{Error, Result};
use crate::planning_center::{BatchReport, PlanningCenterClient, Transport};

use super::{tally, warn_if_truncated};

/// Which people to delete.
#[derive(Debug, Clone, Default)]
pub struct DeletePeopleOptions {
    /// Ids to leave untouched
    pub skip: Vec<String>,
    /// Delete only this person instead of everyone
    pub person: Option<String>,
}

/// Delete every person (or the one named in `options`) after confirmation.
///
/// Refuses to start without credentials. Nothing is deleted unless
/// `confirmation` approves.
pub async fn run<T, C>(
    client: &PlanningCenterClient<T>,
    options: &DeletePeopleOptions,
    confirmation: &mut C,
) -> Result<BatchReport>
where
    T: Transport,
    C: Confirmation + Send,
{
    if !client.config().has_planning_center_credentials() {
        return Err(Error::config(
            "Application ID or secret not set",
            "Set PCO_APPLICATION_ID and PCO_SECRET environment variables",
        ));
    }

    let (ids, incomplete) = match &options.person {
        Some(id) => (vec![id.clone()], false),
        None => {
            tracing::info!("Fetching all people IDs...");
            let fetched = client.people_ids().await;
            warn_if_truncated(&fetched, "people");
            let incomplete = !fetched.is_complete();
            (fetched.records, incomplete)
        }
    };

    let total = ids.len();
    tracing::info!("Found {} people to delete", total);
    if total == 0 {
        return Ok(BatchReport { incomplete, ..BatchReport::default() });
    }

    let prompt = match &options.person {
        Some(id) => format!("Are you sure you want to delete person {id}? This is irreversible!"),
        None => format!("Are you sure you want to delete all {total} people? This is irreversible!"),
    };
    if !confirmation.confirm(&prompt)? {
        tracing::info!("Aborted");
        return Ok(BatchReport::aborted());
    }

    let mut report = BatchReport { incomplete, ..BatchReport::default() };
    for (i, id) in ids.iter().enumerate() {
        if options.skip.contains(id) {
            tracing::info!("[{}/{}] Skipping person {}", i + 1, total, id);
            report.skipped += 1;
            continue;
        }
        tracing::debug!("[{}/{}] Deleting person {}", i + 1, total, id);
        let result = client.delete_person(id).await;
        tally(&mut report, "Deleted person", id, result);
    }

    Ok(report)
}
