//! Prometheus gauge families for the topology.

use prometheus::{IntGaugeVec, Registry, register_int_gauge_vec_with_registry};

use nettopo_core::metrics::project;
use nettopo_core::model::Topology;

/// Topology presence gauges, registered against the process registry.
///
/// Values are fixed at 1 (existence, not a count). Series recorded
/// from an earlier topology stay until overwritten or the process
/// restarts — stale addresses and links are not retracted.
#[derive(Clone)]
pub(crate) struct TopologyMetrics {
    nodes: IntGaugeVec,
    edges: IntGaugeVec,
}

impl TopologyMetrics {
    pub(crate) fn new(registry: &Registry) -> Self {
        Self {
            nodes: register_int_gauge_vec_with_registry!(
                "kube_nettopo_nodes",
                "Registered nodes",
                &["node", "ip"],
                registry
            )
            .unwrap(),
            edges: register_int_gauge_vec_with_registry!(
                "kube_nettopo_edges",
                "Network edges between nodes",
                &["source", "target", "type", "interface"],
                registry
            )
            .unwrap(),
        }
    }

    /// Applies the projection of `topology` to the gauge families.
    pub(crate) fn record(&self, topology: &Topology) {
        let (nodes, edges) = project(topology);
        for sample in &nodes {
            self.nodes
                .with_label_values(&[sample.node, sample.ip])
                .set(1);
        }
        for sample in &edges {
            self.edges
                .with_label_values(&[sample.source, sample.target, sample.kind, sample.interface])
                .set(1);
        }
    }
}
