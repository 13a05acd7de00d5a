//! # Admin Gate
//!
//! The edit routes are unlocked by a shared password, compared as plain text
//! against the configured value. This is a convenience that hides the edit
//! controls from casual visitors. It is **not** a security boundary: anyone
//! who can reach the spreadsheet endpoint can write to it directly, so real
//! authorization has to be enforced by the backend itself.

use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use ministry_core::errors::MinistryError;

use crate::{middleware::error_handling::AppError, ApiState};

/// Header carrying the admin password on write requests.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Debug, Clone)]
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self { password: password.into() }
    }

    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.password
    }
}

/// Extractor that only succeeds when the request carries the admin password.
///
/// ```ignore
/// async fn update(_admin: AdminAccess, Json(body): Json<ScheduleEntry>) { /* ... */ }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<ApiState>) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok());

        match supplied {
            Some(password) if state.admin.verify(password) => Ok(AdminAccess),
            Some(_) => {
                tracing::warn!("Rejected admin request with a wrong password");
                Err(AppError(MinistryError::Authentication("Invalid admin password".to_string())))
            }
            None => Err(AppError(MinistryError::Authentication(
                "Admin password required".to_string(),
            ))),
        }
    }
}
