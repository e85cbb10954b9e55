//! Sort config synchronizer CLI.
//!
//! ```text
//! sort-config-sync --config sdk.toml query <sort_task_id>
//!     one reload, prints the consume config as JSON
//!
//! sort-config-sync --config sdk.toml run
//!     ┌────────────┐  reload_once  ┌─────────┐  GET   ┌─────────┐
//!     │ConfigPoller│──────────────▶│  query  │───────▶│ manager │
//!     └────────────┘               └────┬────┘        └─────────┘
//!                                       │ publish
//!                                       ▼
//!                  admin endpoint ◀── SnapshotStore
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use sort_config_sync::admin::{self, AdminState};
use sort_config_sync::config::{load_config, SdkConfig};
use sort_config_sync::lifecycle::{signals, Shutdown};
use sort_config_sync::observability::{logging, metrics, StatManager};
use sort_config_sync::{ConfigPoller, QueryConsumeConfig, SnapshotStore};

#[derive(Parser)]
#[command(name = "sort-config-sync")]
#[command(about = "Keeps a sort task's consume config in sync with the manager", long_about = None)]
struct Cli {
    /// Path to the SDK configuration file (TOML).
    #[arg(short, long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reload once and print the consume config of a sort task
    Query {
        /// Defaults to the configured sort task id
        sort_task_id: Option<String>,
    },
    /// Keep reloading in the background until interrupted
    Run,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    logging::init_logging(&config.observability);

    tracing::info!(
        api_url = %config.manager.api_url,
        sort_cluster_name = %config.manager.sort_cluster_name,
        sort_task_id = %config.manager.sort_task_id,
        "Configuration loaded"
    );

    let store = Arc::new(SnapshotStore::new());
    let stats = Arc::new(StatManager::new());
    let query = Arc::new(QueryConsumeConfig::from_config(
        config.manager.clone(),
        store.clone(),
        stats.clone(),
    )?);

    match cli.command {
        Commands::Query { sort_task_id } => {
            let sort_task_id = sort_task_id.unwrap_or_else(|| config.manager.sort_task_id.clone());
            let consume = query.query_consume_config(&sort_task_id).await;
            println!("{}", serde_json::to_string_pretty(&consume)?);
        }
        Commands::Run => run(config, query, store, stats).await?,
    }

    Ok(())
}

async fn run(
    config: SdkConfig,
    query: Arc<QueryConsumeConfig>,
    store: Arc<SnapshotStore>,
    stats: Arc<StatManager>,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let mut tasks = Vec::new();

    let poller = ConfigPoller::new(query, config.reload.clone());
    tasks.push(tokio::spawn(poller.run(shutdown.subscribe())));

    if config.admin.enabled {
        let listener = TcpListener::bind(&config.admin.bind_address).await?;
        let state = AdminState { store, stats };
        let admin_shutdown = shutdown.subscribe();
        tasks.push(tokio::spawn(async move {
            if let Err(e) = admin::serve(listener, state, admin_shutdown).await {
                tracing::error!(error = %e, "Admin endpoint failed");
            }
        }));
    }

    signals::wait_for_termination().await;
    shutdown.trigger();

    for task in tasks {
        let _ = task.await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
