//! Transport and decode failures must leave the published snapshot alone.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sort_config_sync::observability::StatManager;
use sort_config_sync::{FetchError, QueryConsumeConfig, ReloadStatus, SnapshotStore, SyncError};

mod common;

/// Answers the first request with a valid update, then `fail_with` forever.
async fn flaky_manager<F, Fut>(fail_with: F) -> QueryConsumeConfig
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = (u16, String)> + Send + 'static,
{
    let calls = Arc::new(AtomicU32::new(0));
    let fail_with = Arc::new(fail_with);
    let (addr, _) = common::start_mock_manager(move |_| {
        let call = calls.fetch_add(1, Ordering::SeqCst);
        let fail_with = fail_with.clone();
        async move {
            if call == 0 {
                (200, common::UPDATED_BODY.to_string())
            } else {
                fail_with().await
            }
        }
    })
    .await;

    let mut config = common::manager_config(addr);
    config.request_timeout_secs = 1;
    QueryConsumeConfig::from_config(
        config,
        Arc::new(SnapshotStore::new()),
        Arc::new(StatManager::new()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_malformed_body_keeps_snapshot() {
    let client = flaky_manager(|| async { (200, "<html>gateway error</html>".to_string()) }).await;

    assert_eq!(client.query_consume_config("task1").await.topics.len(), 2);

    let status = client.reload_once().await;
    assert!(matches!(status, ReloadStatus::Failed(SyncError::Fetch(FetchError::Decode(_)))));
    assert_eq!(client.query_consume_config("task1").await.topics.len(), 2);
    assert_eq!(client.store().fingerprint(), "abc");
}

#[tokio::test]
async fn test_incomplete_zone_is_decode_failure() {
    let client = flaky_manager(|| async {
        (
            200,
            r#"{"errCode":0,"md5":"def","data":{"cacheZones":{"task1":{"zoneName":"z9","topics":[]}}}}"#
                .to_string(),
        )
    })
    .await;

    client.reload_once().await;
    let status = client.reload_once().await;
    assert!(matches!(status, ReloadStatus::Failed(SyncError::Fetch(FetchError::Decode(_)))));
    assert_eq!(client.store().fingerprint(), "abc");
    assert_eq!(client.current_consume_config("task1").topics[0].cluster.zone_name, "z1");
}

#[tokio::test]
async fn test_slow_manager_times_out() {
    let client = flaky_manager(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        (200, r#"{"errCode":1}"#.to_string())
    })
    .await;

    client.reload_once().await;
    let status = client.reload_once().await;
    assert!(matches!(status, ReloadStatus::Failed(SyncError::Fetch(FetchError::Timeout(1)))));
    assert_eq!(client.current_consume_config("task1").topics.len(), 2);
}

#[tokio::test]
async fn test_unreachable_manager_on_cold_start() {
    // Bind and drop to get a port nobody listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = QueryConsumeConfig::from_config(
        common::manager_config(addr),
        Arc::new(SnapshotStore::new()),
        Arc::new(StatManager::new()),
    )
    .unwrap();

    assert!(client.query_consume_config("task1").await.is_empty());
    assert!(matches!(
        client.reload_once().await,
        ReloadStatus::Failed(SyncError::Fetch(FetchError::Transport(_)))
    ));
    assert_eq!(client.store().fingerprint(), "");
}
