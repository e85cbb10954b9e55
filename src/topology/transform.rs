//! Manager document → published snapshot.
//!
//! The snapshot is rebuilt from scratch on every update; nothing is merged
//! with the previous one. Values are copied through as the manager sent
//! them; missing fields were already rejected while decoding.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::manager::response::{CacheZone, ManagerResponse};
use crate::topology::types::{Cluster, Snapshot, Topic};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// An "updated" response arrived without a topology payload.
    #[error("Updated manager response carries no data")]
    MissingData,
}

/// Build the snapshot for an "updated" manager response.
pub fn transform(response: ManagerResponse) -> Result<Snapshot, TransformError> {
    let zones = response.data.ok_or(TransformError::MissingData)?.into_cache_zones();

    let mut topics_by_task: HashMap<String, Vec<Topic>> = HashMap::with_capacity(zones.len());
    for (sort_task_id, zone) in zones {
        topics_by_task.entry(sort_task_id).or_default().extend(zone_topics(zone));
    }

    Ok(Snapshot::new(topics_by_task))
}

fn zone_topics(zone: CacheZone) -> Vec<Topic> {
    let cluster = Arc::new(Cluster::new(zone.zone_name, zone.service_url, zone.authentication));
    let zone_type = zone.zone_type;

    zone.topics
        .into_iter()
        .map(|raw| Topic {
            topic: raw.topic,
            topic_type: zone_type.clone(),
            cluster: cluster.clone(),
            partition_cnt: raw.partition_cnt,
            properties: raw.topic_properties.unwrap_or_default(),
        })
        .collect()
}
