use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::admin::AdminState;
use crate::observability::StatisticsSnapshot;
use crate::topology::ConsumeConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub version: &'static str,
    pub md5: String,
    pub publishes: u64,
    pub task_ids: Vec<String>,
    pub topics: usize,
}

pub async fn get_status(State(state): State<AdminState>) -> Json<SyncStatus> {
    let published = state.store.published();
    let mut task_ids: Vec<String> = published.snapshot.task_ids().map(str::to_string).collect();
    task_ids.sort();
    Json(SyncStatus {
        version: env!("CARGO_PKG_VERSION"),
        md5: published.fingerprint.clone(),
        publishes: published.version,
        task_ids,
        topics: published.snapshot.topic_count(),
    })
}

pub async fn get_consume_config(
    State(state): State<AdminState>,
    Path(sort_task_id): Path<String>,
) -> Json<ConsumeConfig> {
    Json(ConsumeConfig::from_snapshot(
        &state.store.current_snapshot(),
        &sort_task_id,
    ))
}

pub async fn get_stats(
    State(state): State<AdminState>,
    Path(sort_task_id): Path<String>,
) -> Json<StatisticsSnapshot> {
    Json(state.stats.snapshot(&sort_task_id))
}
