//! nettopod - Local network topology exporter daemon.
//!
//! Discovers the host's own addresses, neighbors and gateways via
//! iproute2 and exposes the result two ways: Prometheus gauges on one
//! port, and a node-graph JSON API on another for visualization.

mod exporter;
mod handlers;
mod metrics;
mod refresh;
mod state;

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use clap::Parser;
use prometheus::Registry;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use nettopo_core::collector::{Collector, IpRunner};

use exporter::MetricsService;
use metrics::TopologyMetrics;
use state::{AppState, SharedState};

// ============================================================
// CLI
// ============================================================

#[derive(Parser)]
#[command(name = "nettopod", about = "Network topology exporter daemon", version = nettopo_core::VERSION)]
struct Args {
    /// Graph API listen address.
    #[arg(long, default_value = "0.0.0.0:8001", env = "NETTOPO_LISTEN")]
    listen: String,

    /// Prometheus exposition listen address.
    #[arg(long, default_value = "0.0.0.0:8000", env = "NETTOPO_METRICS_LISTEN")]
    metrics_listen: String,

    /// Node identifier used in topology records.
    /// If not set, falls back to the system hostname.
    #[arg(long, env = "NODE_NAME")]
    node_name: Option<String>,
}

// ============================================================
// Main
// ============================================================

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nettopod=info".parse().unwrap()),
        )
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(async_main(args));
}

async fn async_main(args: Args) {
    let node = args.node_name.clone().unwrap_or_else(get_hostname);
    if node.is_empty() {
        warn!("node name is empty; graph responses will be empty");
    }
    info!(version = nettopo_core::VERSION, node = %node, "starting");

    let registry = Registry::new();
    let topology_metrics = TopologyMetrics::new(&registry);

    let state: SharedState = Arc::new(AppState {
        node,
        collector: Collector::new(IpRunner::new()),
    });

    let cancel = CancellationToken::new();

    // Metrics listener (own port)
    let metrics_addr: SocketAddr = args
        .metrics_listen
        .parse()
        .expect("invalid metrics listen address");
    let metrics_handle = MetricsService::new(metrics_addr, registry, cancel.clone())
        .run()
        .await;

    // Periodic refresh into the gauges
    let refresh_handle = tokio::spawn(refresh::refresh_loop(
        state.clone(),
        topology_metrics,
        cancel.clone(),
    ));

    // Graph API listener
    let app = Router::new()
        .route("/api/health", get(handlers::handle_health))
        .route("/api/graph/fields", get(handlers::handle_fields))
        .route("/api/graph/data", get(handlers::handle_data))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = args.listen.parse().expect("invalid listen address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    info!(%addr, "graph API listening");

    let shutdown = cancel.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            shutdown.cancel();
        })
        .await
        .expect("server error");

    let _ = refresh_handle.await;
    let _ = metrics_handle.await;
    info!("shutdown complete");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the daemon just runs until killed.
        warn!(error = %e, "failed to install shutdown signal handler");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}

/// Get machine hostname via the `hostname` command.
fn get_hostname() -> String {
    process::Command::new("hostname")
        .output()
        .ok()
        .and_then(|out| {
            if out.status.success() {
                String::from_utf8(out.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_default()
}
