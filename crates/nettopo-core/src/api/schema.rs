//! Static field descriptors for the node-graph panel.
//!
//! Clients call `GET /api/graph/fields` once to learn the column
//! types and display attributes of the data endpoint. The answer is
//! pure static data and must serialize identically on every call.

use serde::Serialize;

/// One field descriptor.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct FieldSchema {
    pub field_name: &'static str,
    #[serde(rename = "type")]
    pub field_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'static str>,
}

impl FieldSchema {
    const fn plain(field_name: &'static str, field_type: &'static str) -> Self {
        Self {
            field_name,
            field_type,
            color: None,
            display_name: None,
        }
    }
}

/// Response body of `GET /api/graph/fields`.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct GraphFields {
    pub nodes_fields: Vec<FieldSchema>,
    pub edges_fields: Vec<FieldSchema>,
}

/// Field descriptors for graph nodes and edges.
pub fn graph_fields() -> GraphFields {
    GraphFields {
        nodes_fields: vec![
            FieldSchema::plain("id", "string"),
            FieldSchema::plain("title", "string"),
            FieldSchema::plain("subTitle", "string"),
            FieldSchema {
                field_name: "detail__role",
                field_type: "string",
                color: None,
                display_name: Some("Role"),
            },
            FieldSchema {
                field_name: "arc__failed",
                field_type: "number",
                color: Some("red"),
                display_name: Some("Failed"),
            },
            FieldSchema {
                field_name: "arc__passed",
                field_type: "number",
                color: Some("green"),
                display_name: Some("Passed"),
            },
            FieldSchema::plain("mainStat", "string"),
        ],
        edges_fields: vec![
            FieldSchema::plain("id", "string"),
            FieldSchema::plain("source", "string"),
            FieldSchema::plain("target", "string"),
            FieldSchema::plain("mainStat", "number"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_serialization_is_byte_stable() {
        let first = serde_json::to_string(&graph_fields()).unwrap();
        let second = serde_json::to_string(&graph_fields()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn descriptors_match_panel_contract() {
        let fields = graph_fields();
        assert_eq!(fields.nodes_fields.len(), 7);
        assert_eq!(fields.edges_fields.len(), 4);

        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["nodes_fields"][0]["field_name"], "id");
        assert_eq!(json["nodes_fields"][3]["displayName"], "Role");
        assert_eq!(json["nodes_fields"][4]["color"], "red");
        assert_eq!(json["nodes_fields"][5]["color"], "green");
        assert_eq!(json["edges_fields"][3]["type"], "number");
        // Plain descriptors omit the optional attributes entirely.
        assert!(json["nodes_fields"][0].get("color").is_none());
        assert!(json["nodes_fields"][0].get("displayName").is_none());
    }
}
