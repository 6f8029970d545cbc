//! JSON-serializable API types for the graph endpoints.

pub mod graph;
pub mod schema;

pub use graph::{GraphEdge, GraphNode, GraphQuery, NodeGraph, format_for_nodegraph};
pub use schema::{FieldSchema, GraphFields, graph_fields};
