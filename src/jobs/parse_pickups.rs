//! Enrich free-text authorized pickup lists with contact details.
//!
//! Each source value `Jane Doe,Bob Smith` becomes
//! `Jane Doe;<email>;<phone>|Bob Smith;<email>;<phone>` and is stored on the
//! target field definition for the same person.

use crate::constants::fields;
use crate::error::Result;
use crate::planning_center::{BatchReport, PlanningCenterClient, Transport};
use crate::transform::{format_pickup_member, join_pickup_members, split_pickup_names};

use super::{tally, warn_if_truncated};

/// Which fields to read and write.
#[derive(Debug, Clone)]
pub struct PickupOptions {
    /// Field holding the comma-separated names
    pub source_field: String,
    /// Field that receives the enriched value
    pub target_field: String,
    /// Overwrite the source value instead of writing to the target field
    pub in_place: bool,
}

impl Default for PickupOptions {
    fn default() -> Self {
        Self {
            source_field: fields::AUTHORIZED_PICKUPS.to_string(),
            target_field: fields::AUTHORIZED_PICKUPS_PARSED.to_string(),
            in_place: false,
        }
    }
}

/// Enrich a comma-separated list of names into the `name;email;phone|…` form.
///
/// Names are looked up one at a time; the first search match is taken as is.
pub async fn enrich<T: Transport>(client: &PlanningCenterClient<T>, value: &str) -> String {
    let mut members = Vec::new();
    for name in split_pickup_names(value) {
        let contact = client.find_contact(name).await;
        if contact.is_none() {
            tracing::info!("No match for pickup {:?}", name);
        }
        let email = contact.as_ref().and_then(|c| c.email.as_deref());
        let phone = contact.as_ref().and_then(|c| c.phone.as_deref());
        members.push(format_pickup_member(name, email, phone));
    }
    join_pickup_members(&members)
}

/// Run the enrichment over every stored pickup list.
pub async fn run<T: Transport>(client: &PlanningCenterClient<T>, options: &PickupOptions) -> Result<BatchReport> {
    let source = client.field_definition_id(&options.source_field).await?;
    let target = if options.in_place {
        source.clone()
    } else {
        client.field_definition_id(&options.target_field).await?
    };

    let fetched = client.field_data(&source).await;
    warn_if_truncated(&fetched, "pickup lists");

    let mut report = BatchReport {
        incomplete: !fetched.is_complete(),
        ..BatchReport::default()
    };

    for datum in &fetched.records {
        let value = enrich(client, &datum.value).await;
        tracing::debug!("Person {}: {:?} -> {:?}", datum.person_id, datum.value, value);

        let result = if options.in_place {
            client.update_field_data(&datum.id, &target, &value).await
        } else {
            client.create_field_data(&datum.person_id, &target, &value).await
        };
        tally(&mut report, "Stored pickups for person", &datum.person_id, result);
    }

    Ok(report)
}
