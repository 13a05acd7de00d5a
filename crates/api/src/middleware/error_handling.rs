//! # Error Handling Middleware
//!
//! Maps `MinistryError` to HTTP status codes and a JSON body of the form
//! `{"error": message}`, so every route reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use ministry_core::errors::MinistryError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use ministry_api::middleware::error_handling::AppError;
/// use ministry_core::errors::MinistryError;
///
/// async fn handler(content: String) -> Result<Json<String>, AppError> {
///     if content.trim().is_empty() {
///         return Err(AppError(MinistryError::Validation("Content is required".to_string())));
///     }
///     Ok(Json(content))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub MinistryError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MinistryError::NotConnected => StatusCode::SERVICE_UNAVAILABLE,
            err if err.is_backend_failure() => StatusCode::BAD_GATEWAY,
            MinistryError::NotFound(_) => StatusCode::NOT_FOUND,
            MinistryError::Validation(_) => StatusCode::BAD_REQUEST,
            MinistryError::Authentication(_) => StatusCode::UNAUTHORIZED,
            MinistryError::Configuration(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Automatic conversion from MinistryError to AppError
impl From<MinistryError> for AppError {
    fn from(err: MinistryError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Untyped failures are treated as transport problems.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MinistryError::Transport(err))
    }
}

