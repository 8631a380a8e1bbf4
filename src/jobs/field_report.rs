//! Read-only listing of people or of one field definition's data.

use crate::error::Result;
use crate::planning_center::{FieldDatum, FieldDefinitionId, Fetched, PlanningCenterClient, Transport};

/// What the report found.
#[derive(Debug)]
pub enum FieldReport {
    /// No field was named: every person id.
    People(Fetched<String>),
    /// Every stored value of the named field.
    FieldData {
        /// Name given on the command line
        name: String,
        /// Resolved definition id
        definition: FieldDefinitionId,
        /// Values in fetch order
        data: Fetched<FieldDatum>,
    },
}

/// List the data for `field`, or every person id when no field is given.
pub async fn run<T: Transport>(client: &PlanningCenterClient<T>, field: Option<&str>) -> Result<FieldReport> {
    let Some(name) = field else {
        return Ok(FieldReport::People(client.people_ids().await));
    };

    let definition = client.field_definition_id(name).await?;
    tracing::info!("Field definition ID for '{}': {}", name, definition);
    let data = client.field_data(&definition).await;

    Ok(FieldReport::FieldData {
        name: name.to_string(),
        definition,
        data,
    })
}
