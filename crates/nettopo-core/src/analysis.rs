//! Topology analysis.
//!
//! Pure transformation of the three raw provider outputs into one
//! [`Topology`]. No I/O, no shared state: callers on different actors
//! can analyze concurrently and each gets a fresh record.

use serde_json::Value;

use crate::collector::raw::{InterfaceRecord, NeighborRecord, RawOutput, RouteRecord};
use crate::model::{Link, LinkKind, Topology, UNKNOWN_INTERFACE};

/// Builds a normalized topology for `node` from raw provider output.
///
/// Unstructured provider output means "no data" for that category.
/// Individual records that do not deserialize, address entries that
/// are not IPv4, neighbors without a destination, and routes whose
/// gateway is one of the host's own addresses are all skipped
/// silently. Neighbor links come before gateway links.
pub fn analyze(
    node: &str,
    addresses: &RawOutput,
    routes: &RawOutput,
    neighbors: &RawOutput,
) -> Topology {
    let mut topology = Topology {
        node: node.to_string(),
        ips: Vec::new(),
        links: Vec::new(),
    };

    for iface in decode::<InterfaceRecord>(addresses) {
        for addr in iface.addr_info {
            if addr.family.as_deref() == Some("inet")
                && let Some(local) = addr.local
            {
                topology.ips.push(local);
            }
        }
    }

    for neigh in decode::<NeighborRecord>(neighbors) {
        if let Some(dst) = neigh.dst
            && !dst.is_empty()
        {
            topology.links.push(Link {
                to: dst,
                kind: LinkKind::L2Neighbor,
                interface: device_or_unknown(neigh.dev),
            });
        }
    }

    for route in decode::<RouteRecord>(routes) {
        if let Some(gateway) = route.gateway
            && !gateway.is_empty()
            // A route through one of our own addresses is not an
            // external link.
            && !topology.ips.contains(&gateway)
        {
            topology.links.push(Link {
                to: gateway,
                kind: LinkKind::L3Gateway,
                interface: device_or_unknown(route.dev),
            });
        }
    }

    topology
}

/// Deserializes each record of a raw output, skipping malformed ones.
fn decode<T: serde::de::DeserializeOwned>(raw: &RawOutput) -> impl Iterator<Item = T> + '_ {
    raw.records()
        .iter()
        .filter_map(|value: &Value| serde_json::from_value(value.clone()).ok())
}

fn device_or_unknown(dev: Option<String>) -> String {
    match dev {
        Some(dev) if !dev.is_empty() => dev,
        _ => UNKNOWN_INTERFACE.to_string(),
    }
}
