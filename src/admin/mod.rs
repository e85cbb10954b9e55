//! Read-only admin endpoint.
//!
//! Serves the published snapshot and counters. Nothing here triggers a
//! manager round trip.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::lifecycle::ShutdownSignal;
use crate::observability::StatManager;
use crate::store::SnapshotStore;
use self::handlers::*;

/// Shared state for admin handlers.
#[derive(Clone)]
pub struct AdminState {
    pub store: Arc<SnapshotStore>,
    pub stats: Arc<StatManager>,
}

pub fn setup_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/consume-config/{sort_task_id}", get(get_consume_config))
        .route("/stats/{sort_task_id}", get(get_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve the admin router until the shutdown signal fires.
pub async fn serve(
    listener: TcpListener,
    state: AdminState,
    mut shutdown: ShutdownSignal,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Admin endpoint starting");

    axum::serve(listener, setup_admin_router(state))
        .with_graceful_shutdown(async move { shutdown.wait().await })
        .await?;

    tracing::info!("Admin endpoint stopped");
    Ok(())
}
