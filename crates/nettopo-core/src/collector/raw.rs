//! Raw provider output and lenient record shapes.
//!
//! `ip -j` normally prints a JSON array of records, but the command
//! can also emit plain text (old iproute2 builds, error messages) or
//! nothing at all. Instead of inspecting types at every use site, the
//! output is tagged once here: either a sequence of records or an
//! opaque string the analyzer treats as "no data".

use serde::Deserialize;
use serde_json::Value;

/// Output of one provider command.
#[derive(Clone, Debug, PartialEq)]
pub enum RawOutput {
    /// Stdout parsed as a JSON array. Individual elements may still be
    /// malformed; consumers skip what they cannot read.
    Structured(Vec<Value>),
    /// Anything that is not a JSON array, kept verbatim for logging.
    Unstructured(String),
}

impl RawOutput {
    /// Parses captured stdout. Only a top-level JSON array counts as
    /// structured data; scalars and objects are not record sequences.
    pub fn parse(stdout: &str) -> Self {
        match serde_json::from_str::<Value>(stdout) {
            Ok(Value::Array(records)) => RawOutput::Structured(records),
            _ => RawOutput::Unstructured(stdout.trim().to_string()),
        }
    }

    /// Record sequence, empty for unstructured output.
    pub fn records(&self) -> &[Value] {
        match self {
            RawOutput::Structured(records) => records,
            RawOutput::Unstructured(_) => &[],
        }
    }

    /// Empty structured output, used when a provider command fails.
    pub fn empty() -> Self {
        RawOutput::Unstructured(String::new())
    }
}

/// One interface from `ip -j addr`.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct InterfaceRecord {
    #[serde(default)]
    pub addr_info: Vec<AddrInfo>,
}

/// One address entry of an interface.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct AddrInfo {
    /// Address family: "inet", "inet6", ...
    pub family: Option<String>,
    pub local: Option<String>,
}

/// One route from `ip -j route`.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct RouteRecord {
    pub gateway: Option<String>,
    pub dev: Option<String>,
}

/// One neighbor from `ip -j neigh`.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct NeighborRecord {
    pub dst: Option<String>,
    pub dev: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_array_is_structured() {
        let out = RawOutput::parse(r#"[{"dst": "10.0.0.5"}, {"dst": "10.0.0.6"}]"#);
        assert_eq!(out.records().len(), 2);
    }

    #[test]
    fn parse_plain_text_is_unstructured() {
        let out = RawOutput::parse("Cannot open netlink socket\n");
        assert_eq!(
            out,
            RawOutput::Unstructured("Cannot open netlink socket".to_string())
        );
        assert!(out.records().is_empty());
    }

    #[test]
    fn parse_json_object_is_unstructured() {
        // A lone object is not a record sequence.
        let out = RawOutput::parse(r#"{"dst": "10.0.0.5"}"#);
        assert!(matches!(out, RawOutput::Unstructured(_)));
    }

    #[test]
    fn parse_empty_is_unstructured() {
        assert!(RawOutput::parse("").records().is_empty());
    }

    #[test]
    fn lenient_records_tolerate_missing_fields() {
        let route: RouteRecord = serde_json::from_str(r#"{"dst": "default"}"#).unwrap();
        assert_eq!(route.gateway, None);

        let iface: InterfaceRecord = serde_json::from_str(r#"{"ifname": "lo"}"#).unwrap();
        assert!(iface.addr_info.is_empty());
    }
}
