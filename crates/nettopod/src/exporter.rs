//! Prometheus exposition listener.
//!
//! Serves the process registry's text exposition on a dedicated port,
//! separate from the graph API.

use std::net::SocketAddr;

use axum::{Extension, Router, http::StatusCode, routing::get};
use prometheus::{Registry, TextEncoder};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serves `registry` on `GET /metrics` until `cancel` fires.
pub(crate) struct MetricsService {
    addr: SocketAddr,
    registry: Registry,
    cancel: CancellationToken,
}

impl MetricsService {
    pub(crate) fn new(addr: SocketAddr, registry: Registry, cancel: CancellationToken) -> Self {
        Self {
            addr,
            registry,
            cancel,
        }
    }

    /// Binds the listener and serves in a spawned task. A bind
    /// failure aborts startup.
    pub(crate) async fn run(self) -> JoinHandle<()> {
        let Self {
            addr,
            registry,
            cancel,
        } = self;

        let listener = TcpListener::bind(addr)
            .await
            .expect("failed to bind metrics listener");
        let app = Router::new()
            .route("/metrics", get(metrics))
            .layer(Extension(registry));

        info!(%addr, "metrics listening");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    cancel.cancelled().await;
                    info!("metrics listener stopped");
                })
                .await
                .expect("metrics server error")
        })
    }
}

async fn metrics(Extension(registry): Extension<Registry>) -> (StatusCode, String) {
    match TextEncoder.encode_to_string(&registry.gather()) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("unable to encode metrics: {e}"),
        ),
    }
}
