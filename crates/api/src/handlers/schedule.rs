use axum::{extract::{Path, State}, Json};
use std::sync::Arc;
use ministry_core::{
    dates::normalize_date,
    errors::MinistryError,
    models::{
        dashboard::{DashboardView, StatusFilter},
        schedule::{NewScheduleEntry, ScheduleEntry},
    },
};

use crate::{
    handlers::dashboard::current_view,
    middleware::{auth::AdminAccess, error_handling::AppError},
    ApiState,
};

fn validate_fields(start_date: &str, end_date: &str, content: &str) -> Result<(), MinistryError> {
    if content.trim().is_empty() {
        return Err(MinistryError::Validation("Content is required".to_string()));
    }
    if start_date.trim().is_empty() || end_date.trim().is_empty() {
        return Err(MinistryError::Validation("Start and end dates are required".to_string()));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn list_schedules(State(state): State<Arc<ApiState>>) -> Json<Vec<ScheduleEntry>> {
    Json(state.store.snapshot().await)
}

#[axum::debug_handler]
pub async fn refresh_schedules(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DashboardView>, AppError> {
    state.reload().await?;
    Ok(Json(current_view(&state, StatusFilter::All).await))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn create_schedule(
    _admin: AdminAccess,
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<NewScheduleEntry>,
) -> Result<Json<ScheduleEntry>, AppError> {
    validate_fields(&payload.start_date, &payload.end_date, &payload.content)?;

    let backend = state.backend().await?;
    let created = state.store.add(backend.as_ref(), payload).await?;

    // Pick up anything else that changed in the sheet since the last load.
    if let Err(err) = state.store.refresh(backend.as_ref()).await {
        tracing::warn!("Reload after creating {} failed: {}", created.id, err);
    }

    Ok(Json(created))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn update_schedule(
    _admin: AdminAccess,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<NewScheduleEntry>,
) -> Result<Json<ScheduleEntry>, AppError> {
    validate_fields(&payload.start_date, &payload.end_date, &payload.content)?;

    let mut payload = payload.with_id(id);
    payload.start_date = normalize_date(&payload.start_date);
    payload.end_date = normalize_date(&payload.end_date);

    let backend = state.backend().await?;
    let updated = state.store.update(backend.as_ref(), payload).await?;

    Ok(Json(updated))
}
