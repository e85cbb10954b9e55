//! Published topology data model.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

/// An upstream messaging cluster, built once per zone per reload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub zone_name: String,
    pub service_url: String,
    /// Never rendered by the admin endpoint or CLI.
    #[serde(skip_serializing)]
    pub authentication: String,
}

impl Cluster {
    pub fn new(
        zone_name: impl Into<String>,
        service_url: impl Into<String>,
        authentication: impl Into<String>,
    ) -> Self {
        Self {
            zone_name: zone_name.into(),
            service_url: service_url.into(),
            authentication: authentication.into(),
        }
    }
}

/// A topic a sort task consumes, tied to the cluster that serves it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic: String,
    pub topic_type: String,
    /// Shared with every other topic of the same zone.
    pub cluster: Arc<Cluster>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_cnt: Option<u32>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

/// Sort task id → topics, exactly as published.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    topics: HashMap<String, Vec<Topic>>,
}

impl Snapshot {
    pub fn new(topics: HashMap<String, Vec<Topic>>) -> Self {
        Self { topics }
    }

    /// Topics of one sort task, in manager order.
    pub fn topics(&self, sort_task_id: &str) -> Option<&[Topic]> {
        self.topics.get(sort_task_id).map(Vec::as_slice)
    }

    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn task_count(&self) -> usize {
        self.topics.len()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Answer to a consume-config query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsumeConfig {
    pub topics: Vec<Topic>,
}

impl ConsumeConfig {
    pub fn from_snapshot(snapshot: &Snapshot, sort_task_id: &str) -> Self {
        Self {
            topics: snapshot
                .topics(sort_task_id)
                .map(<[Topic]>::to_vec)
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
