//! Create a publishing episode.

use serde_json::Value;

use crate::error::Result;
use crate::planning_center::{PlanningCenterClient, Transport};

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "New Episode";

/// Create an episode titled `title` on the first channel by name.
pub async fn run<T: Transport>(client: &PlanningCenterClient<T>, title: &str) -> Result<Value> {
    let channel_id = client.first_channel_id().await?;
    tracing::info!("Creating episode {:?} on channel {}", title, channel_id);
    client.create_episode(&channel_id, title).await
}
