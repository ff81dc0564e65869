use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode},
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use super::dispatch::{self, Dispatch};
use super::forward::{self, OutboundBody};
use crate::providers::RoutingTable;

#[derive(Clone)]
struct AppState {
    table: Arc<RoutingTable>,
    client: reqwest::Client,
}

/// Every method and path lands in the same handler.
pub fn create_router(table: RoutingTable, client: reqwest::Client) -> Router {
    let state = AppState {
        table: Arc::new(table),
        client,
    };

    Router::new()
        .fallback(proxy)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn proxy(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response<Body>, (StatusCode, Json<Value>)> {
    let (parts, body) = request.into_parts();

    let (route, outbound) = if dispatch::sniffs_json(&parts.method, &parts.headers) {
        let body_bytes = body
            .collect()
            .await
            .map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Failed to read body: {}", e) })),
                )
            })?
            .to_bytes();

        let mut route = dispatch::resolve(&state.table, &body_bytes);
        let outbound = match route.body.take() {
            Some(rewritten) => OutboundBody::Rewritten(rewritten),
            None => OutboundBody::Buffered(body_bytes),
        };
        (route, outbound)
    } else {
        (Dispatch::fallback(), OutboundBody::Streaming(body))
    };

    let url = dispatch::target_url(&state.table, route.provider, &parts.uri);

    tracing::info!("Proxying request to: {}", url);

    forward::forward(&state.client, &parts, &url, outbound)
        .await
        .map_err(|e| {
            tracing::error!("Upstream request to {} failed: {:#}", url, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": format!("Upstream request failed: {}", e) })),
            )
        })
}
