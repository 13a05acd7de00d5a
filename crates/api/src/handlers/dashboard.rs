use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use ministry_core::dashboard::build_view;
use ministry_core::models::dashboard::{DashboardView, StatusFilter};
use serde::Deserialize;

use crate::{middleware::error_handling::AppError, ApiState};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub filter: Option<String>,
}

/// Computes the view from the cache. Statuses are derived against today's
/// local date on every call and never stored.
pub async fn current_view(state: &ApiState, filter: StatusFilter) -> DashboardView {
    let entries = state.store.snapshot().await;
    let error = state.store.last_error().await;
    build_view(&entries, Local::now().date_naive(), filter, error)
}

#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let filter = match query.filter.as_deref() {
        Some(raw) => raw.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };

    // First visit after startup without a successful load: try once more.
    if !state.store.is_loaded().await {
        if let Err(err) = state.reload().await {
            tracing::debug!("Dashboard served without data: {}", err);
        }
    }

    Ok(Json(current_view(&state, filter).await))
}
