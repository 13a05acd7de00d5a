use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::ApiState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub valid: bool,
}

/// Lets the page check the admin password before showing edit controls.
/// Write routes check it again on every request.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Json<LoginResponse> {
    let valid = state.admin.verify(&payload.password);
    if !valid {
        tracing::info!("Admin login attempt with a wrong password");
    }
    Json(LoginResponse { valid })
}
