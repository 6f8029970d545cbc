//! Node-graph formatting for the visualization API.
//!
//! Converts a [`Topology`] into the nodes/edges JSON shape consumed
//! by a node-graph panel, shaped by URL query parameters. Node ids
//! are positional (`node-1`, `node-2`, ...) and regenerated on every
//! call — the graph intentionally has no durable identity.

use serde::Serialize;

use crate::model::Topology;

/// Fixed per-node display values.
const NODE_ROLE: &str = "network_node";
const NODE_MAIN_STAT: &str = "active";
/// Fixed per-edge weight.
const EDGE_MAIN_STAT: i64 = 100;

/// URL query parameters with repeated keys preserved in order.
///
/// Selection branches test key presence only; value-reading branches
/// use the first value of a repeated key.
#[derive(Clone, Debug, Default)]
pub struct GraphQuery {
    pairs: Vec<(String, String)>,
}

impl GraphQuery {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl FromIterator<(String, String)> for GraphQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One graph node, rendered from one topology IP.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct GraphNode {
    /// Positional id, `node-<1-based index>`. Not stable across calls.
    pub id: String,
    /// The host identifier (same for every node of one topology).
    pub title: String,
    #[serde(rename = "subTitle")]
    pub sub_title: String,
    #[serde(rename = "detail__role")]
    pub detail_role: String,
    #[serde(rename = "arc__failed")]
    pub arc_failed: f64,
    #[serde(rename = "arc__passed")]
    pub arc_passed: f64,
    #[serde(rename = "mainStat")]
    pub main_stat: String,
}

/// One graph edge, rendered from one topology link.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct GraphEdge {
    /// Positional id, `edge-<0-based index>`.
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "mainStat")]
    pub main_stat: i64,
}

/// Response body of `GET /api/graph/data`.
#[derive(Clone, Serialize, Debug, PartialEq, Default)]
pub struct NodeGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Formats a topology as a node graph, honoring the query's selection
/// mode. Branches are mutually exclusive and evaluated in order; the
/// first matching key wins.
///
/// An empty node name suppresses all output: an unnamed host yields
/// an empty graph rather than nodes with blank titles.
pub fn format_for_nodegraph(topology: &Topology, query: &GraphQuery) -> NodeGraph {
    let mut nodes = candidate_nodes(topology);
    let mut edges = candidate_edges(topology);

    if query.has("kube_nettopo_nodes") || query.has("nodes") {
        return NodeGraph {
            nodes,
            edges: Vec::new(),
        };
    }
    if query.has("kube_nettopo_edges") || query.has("edges") {
        return NodeGraph {
            nodes: Vec::new(),
            edges,
        };
    }
    if query.has("query") {
        if query.first("query") == Some("text1") {
            nodes.retain(|n| n.title == topology.node);
            edges.retain(|e| e.main_stat > 50);
        }
        return NodeGraph { nodes, edges };
    }
    if query.has("service") {
        // Historical filter: generated ids are never "processor"-
        // prefixed, so this selection is always empty.
        if query.first("service") == Some("processors") {
            nodes.retain(|n| n.id.starts_with("processor"));
            edges.retain(|e| e.source.starts_with("processor"));
        }
        return NodeGraph { nodes, edges };
    }

    NodeGraph { nodes, edges }
}

fn candidate_nodes(topology: &Topology) -> Vec<GraphNode> {
    if topology.node.is_empty() {
        return Vec::new();
    }
    topology
        .ips
        .iter()
        .enumerate()
        .map(|(i, ip)| GraphNode {
            id: format!("node-{}", i + 1),
            title: topology.node.clone(),
            sub_title: ip.clone(),
            detail_role: NODE_ROLE.to_string(),
            arc_failed: 0.0,
            arc_passed: 1.0,
            main_stat: NODE_MAIN_STAT.to_string(),
        })
        .collect()
}

fn candidate_edges(topology: &Topology) -> Vec<GraphEdge> {
    if topology.node.is_empty() {
        return Vec::new();
    }
    topology
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| GraphEdge {
            id: format!("edge-{i}"),
            source: topology.node.clone(),
            target: link.to.clone(),
            main_stat: EDGE_MAIN_STAT,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Link, LinkKind};

    fn sample_topology() -> Topology {
        Topology {
            node: "host-a".to_string(),
            ips: vec!["10.0.0.1".to_string()],
            links: vec![Link {
                to: "10.0.0.254".to_string(),
                kind: LinkKind::L3Gateway,
                interface: "eth0".to_string(),
            }],
        }
    }

    fn query(pairs: &[(&str, &str)]) -> GraphQuery {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_query_returns_full_graph() {
        let graph = format_for_nodegraph(&sample_topology(), &GraphQuery::default());
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.nodes[0].id, "node-1");
        assert_eq!(graph.nodes[0].title, "host-a");
        assert_eq!(graph.nodes[0].sub_title, "10.0.0.1");
        assert_eq!(graph.edges[0].id, "edge-0");
        assert_eq!(graph.edges[0].target, "10.0.0.254");
        assert_eq!(graph.edges[0].main_stat, 100);
    }

    #[test]
    fn empty_node_name_suppresses_all_output() {
        let mut topology = sample_topology();
        topology.node = String::new();

        for pairs in [
            vec![],
            vec![("nodes", "")],
            vec![("edges", "")],
            vec![("query", "text1")],
            vec![("service", "processors")],
        ] {
            let graph = format_for_nodegraph(&topology, &query(&pairs));
            assert!(graph.nodes.is_empty());
            assert!(graph.edges.is_empty());
        }
    }

    #[test]
    fn nodes_key_returns_nodes_only() {
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("nodes", "")]));
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());

        let graph = format_for_nodegraph(&sample_topology(), &query(&[("kube_nettopo_nodes", "1")]));
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn edges_key_returns_edges_only() {
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("edges", "")]));
        assert!(graph.nodes.is_empty());
        assert_eq!(graph.edges.len(), 1);

        let graph = format_for_nodegraph(&sample_topology(), &query(&[("kube_nettopo_edges", "1")]));
        assert!(graph.nodes.is_empty());
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn nodes_key_wins_over_query_key() {
        let graph = format_for_nodegraph(
            &sample_topology(),
            &query(&[("query", "text1"), ("nodes", "")]),
        );
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn query_text1_passes_current_shape_data_through() {
        // Every node shares the topology's title and every edge has
        // mainStat 100, so the text1 filters keep everything.
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("query", "text1")]));
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn query_other_value_is_a_noop_filter() {
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("query", "text2")]));
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn service_processors_selects_nothing() {
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("service", "processors")]));
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn service_other_value_returns_full_graph() {
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("service", "gateways")]));
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn repeated_key_uses_first_value() {
        let graph = format_for_nodegraph(
            &sample_topology(),
            &query(&[("query", "text2"), ("query", "text1")]),
        );
        // First value "text2" → no-op filter, not the text1 branch.
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn unrecognized_keys_return_full_graph() {
        let graph = format_for_nodegraph(&sample_topology(), &query(&[("foo", "bar")]));
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn node_json_uses_panel_field_names() {
        let graph = format_for_nodegraph(&sample_topology(), &GraphQuery::default());
        let json = serde_json::to_value(&graph.nodes[0]).unwrap();
        assert_eq!(json["subTitle"], "10.0.0.1");
        assert_eq!(json["detail__role"], "network_node");
        assert_eq!(json["arc__failed"], 0.0);
        assert_eq!(json["arc__passed"], 1.0);
        assert_eq!(json["mainStat"], "active");
    }
}
