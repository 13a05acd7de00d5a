//! Handlers for choosing the spreadsheet backend at runtime.
//!
//! Every change that leaves the dashboard connected triggers a reload, so
//! the response already reflects the new backend's data.

use axum::{extract::{Query, State}, Json};
use ministry_backend::connection::{ConnectionConfig, ConnectionMode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    #[serde(flatten)]
    pub mode: ConnectionMode,
    pub connected: bool,
    pub hardcoded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionStatus {
    fn from_config(config: &ConnectionConfig, error: Option<String>) -> Self {
        Self {
            mode: config.mode.clone(),
            connected: config.is_connected(),
            hardcoded: config.hardcoded,
            error,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectRequest {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkParams {
    pub key: Option<String>,
    pub source: Option<String>,
}

async fn status_after_reload(state: &ApiState) -> ConnectionStatus {
    let error = state.reload().await.err().map(|err| err.to_string());
    let config = state.connection.read().await;
    ConnectionStatus::from_config(&config, error)
}

#[axum::debug_handler]
pub async fn get_connection(State(state): State<Arc<ApiState>>) -> Json<ConnectionStatus> {
    let config = state.connection.read().await;
    Json(ConnectionStatus::from_config(&config, state.store.last_error().await))
}

#[axum::debug_handler]
pub async fn connect(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ConnectRequest>,
) -> Result<Json<ConnectionStatus>, AppError> {
    state.connection.write().await.connect(&payload.url)?;
    Ok(Json(status_after_reload(&state).await))
}

#[axum::debug_handler]
pub async fn enable_demo(State(state): State<Arc<ApiState>>) -> Result<Json<ConnectionStatus>, AppError> {
    state.connection.write().await.enable_demo()?;
    Ok(Json(status_after_reload(&state).await))
}

#[axum::debug_handler]
pub async fn disconnect(State(state): State<Arc<ApiState>>) -> Result<Json<ConnectionStatus>, AppError> {
    state.connection.write().await.disconnect()?;
    let config = state.connection.read().await;
    Ok(Json(ConnectionStatus::from_config(&config, None)))
}

/// Shared-link entry point: `?key=<script url>` or `?source=<script url>`.
#[axum::debug_handler]
pub async fn connect_from_link(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<LinkParams>,
) -> Json<ConnectionStatus> {
    let applied = state
        .connection
        .write()
        .await
        .apply_link_params(params.key.as_deref(), params.source.as_deref());

    if applied {
        Json(status_after_reload(&state).await)
    } else {
        let config = state.connection.read().await;
        Json(ConnectionStatus::from_config(&config, None))
    }
}
