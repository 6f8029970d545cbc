//! HTTP request handlers for the graph API.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use nettopo_core::api::{GraphFields, GraphQuery, NodeGraph, format_for_nodegraph, graph_fields};

use crate::state::SharedState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

pub(crate) async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub(crate) async fn handle_fields() -> Json<GraphFields> {
    Json(graph_fields())
}

/// Collects, analyzes and formats a topology per request. Repeated
/// query keys are preserved in order for the formatter's first-value
/// semantics.
pub(crate) async fn handle_data(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<NodeGraph>, StatusCode> {
    // Provider calls wait on subprocesses — run off the async runtime.
    let graph = tokio::task::spawn_blocking(move || {
        let topology = state.snapshot();
        format_for_nodegraph(&topology, &GraphQuery::new(params))
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(graph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(health) = handle_health().await;
        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn fields_endpoint_serves_static_schema() {
        let Json(first) = handle_fields().await;
        let Json(second) = handle_fields().await;
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
