//! Topology data model.
//!
//! A `Topology` is one host's view of its own network: the IPv4
//! addresses it carries and the links it can observe locally (ARP
//! neighbors, route gateways). It is rebuilt from scratch on every
//! analysis run and never mutated afterwards — there is no cache and
//! no persistence, so two consecutive runs may legitimately differ.

use serde::Serialize;

/// Interface name used when the source record carries none.
pub const UNKNOWN_INTERFACE: &str = "unknown";

/// Normalized per-host snapshot of local IPs and observed links.
#[derive(Clone, Serialize, Debug, PartialEq, Eq, Default)]
pub struct Topology {
    /// Identifier of the local host. Resolved once at process startup
    /// (`NODE_NAME` env or system hostname).
    pub node: String,

    /// IPv4 addresses in interface enumeration order.
    /// Duplicates are kept as reported.
    pub ips: Vec<String>,

    /// Observed links, L2 neighbors first, then L3 gateways.
    pub links: Vec<Link>,
}

/// A directed relation from the local node to a neighbor or gateway.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct Link {
    /// Neighbor or gateway address. Always non-empty: records without
    /// a destination are dropped during analysis, never stored.
    pub to: String,

    /// Layer the link was observed at.
    #[serde(rename = "type")]
    pub kind: LinkKind,

    /// Device name, or [`UNKNOWN_INTERFACE`].
    pub interface: String,
}

/// Link classification, serialized with the exact label values used
/// by the metrics families.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// ARP/NDP neighbor on the local segment.
    #[serde(rename = "L2_neighbor")]
    L2Neighbor,
    /// Next-hop gateway from the routing table.
    #[serde(rename = "L3_gateway")]
    L3Gateway,
}

impl LinkKind {
    /// Label value as exposed in metrics and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::L2Neighbor => "L2_neighbor",
            LinkKind::L3Gateway => "L3_gateway",
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_kind_labels() {
        assert_eq!(LinkKind::L2Neighbor.as_str(), "L2_neighbor");
        assert_eq!(LinkKind::L3Gateway.as_str(), "L3_gateway");
    }

    #[test]
    fn link_serializes_kind_as_type() {
        let link = Link {
            to: "10.0.0.254".to_string(),
            kind: LinkKind::L3Gateway,
            interface: "eth0".to_string(),
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["type"], "L3_gateway");
        assert_eq!(json["to"], "10.0.0.254");
        assert_eq!(json["interface"], "eth0");
    }
}
