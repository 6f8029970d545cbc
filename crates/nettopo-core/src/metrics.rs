//! Gauge projection of a topology.
//!
//! Turns a [`Topology`] into the label sets for the two gauge
//! families. The projection is pure; the owning process applies the
//! samples to its metrics registry (value fixed at 1, last write
//! wins). Series from a previous topology that no longer appear are
//! not retracted here or anywhere else.

use crate::model::Topology;

/// One `kube_nettopo_nodes` sample: this host carries `ip`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSample<'a> {
    pub node: &'a str,
    pub ip: &'a str,
}

/// One `kube_nettopo_edges` sample: a link from this host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSample<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub kind: &'static str,
    pub interface: &'a str,
}

/// Projects a topology into its gauge samples.
pub fn project(topology: &Topology) -> (Vec<NodeSample<'_>>, Vec<EdgeSample<'_>>) {
    let nodes = topology
        .ips
        .iter()
        .map(|ip| NodeSample {
            node: &topology.node,
            ip,
        })
        .collect();

    let edges = topology
        .links
        .iter()
        .map(|link| EdgeSample {
            source: &topology.node,
            target: &link.to,
            kind: link.kind.as_str(),
            interface: &link.interface,
        })
        .collect();

    (nodes, edges)
}
