//! Delete every stored value of one field definition.

use crate::confirm::Confirmation;
use crate::error::Result;
use crate::planning_center::{BatchReport, PlanningCenterClient, Transport};

use super::{tally, warn_if_truncated};

/// Delete all data for the field named `field` after confirmation.
///
/// The whole collection is fetched before the first delete, so removals
/// never shift the pages still to be read.
pub async fn run<T, C>(client: &PlanningCenterClient<T>, field: &str, confirmation: &mut C) -> Result<BatchReport>
where
    T: Transport,
    C: Confirmation + Send,
{
    let definition = client.field_definition_id(field).await?;
    tracing::info!("Deleting all '{}' field data (field ID: {})", field, definition);

    let fetched = client.field_data(&definition).await;
    warn_if_truncated(&fetched, "field data");
    let total = fetched.len();

    let mut report = BatchReport {
        incomplete: !fetched.is_complete(),
        ..BatchReport::default()
    };
    if total == 0 {
        return Ok(report);
    }

    let prompt = format!("Delete {total} '{field}' values? This is irreversible!");
    if !confirmation.confirm(&prompt)? {
        tracing::info!("Aborted");
        return Ok(BatchReport::aborted());
    }

    for datum in &fetched.records {
        let result = client.delete_field_data(&datum.id).await;
        tally(&mut report, "Deleted field datum", &datum.id, result);
    }

    Ok(report)
}
