//! Shared application state.
//!
//! There is no shared mutable state: the node name is resolved once
//! at startup and the collector is stateless, so the refresh task and
//! request handlers share one `Arc` without locking. Each caller gets
//! its own freshly analyzed topology snapshot.

use std::sync::Arc;

use nettopo_core::analysis::analyze;
use nettopo_core::collector::{Collector, IpRunner};
use nettopo_core::model::Topology;

pub(crate) struct AppState {
    /// Node identifier, stable for the process lifetime.
    pub(crate) node: String,
    pub(crate) collector: Collector<IpRunner>,
}

impl AppState {
    /// Collects raw data and analyzes it into a fresh topology.
    /// Blocking (waits on subprocesses) — call under `spawn_blocking`.
    pub(crate) fn snapshot(&self) -> Topology {
        let addresses = self.collector.addresses();
        let routes = self.collector.routes();
        let neighbors = self.collector.neighbors();
        analyze(&self.node, &addresses, &routes, &neighbors)
    }
}

pub(crate) type SharedState = Arc<AppState>;
