use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    connected: bool,
    cached_entries: usize,
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

/// Liveness plus a glance at the cache. Never touches the backend.
async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let connected = state.connection.read().await.is_connected();
    let cached_entries = state.store.snapshot().await.len();

    Json(HealthResponse {
        status: "ok",
        connected,
        cached_entries,
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
