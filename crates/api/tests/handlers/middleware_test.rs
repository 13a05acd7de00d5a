use axum::http::StatusCode;
use axum::response::IntoResponse;
use ministry_api::config::DEFAULT_ADMIN_PASSWORD;
use ministry_api::middleware::error_handling::AppError;
use ministry_core::errors::MinistryError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::test_utils::TestContext;

#[rstest]
#[case(MinistryError::NotConnected, StatusCode::SERVICE_UNAVAILABLE)]
#[case(MinistryError::Backend("ID not found".into()), StatusCode::BAD_GATEWAY)]
#[case(MinistryError::Transport(eyre::eyre!("connection reset")), StatusCode::BAD_GATEWAY)]
#[case(MinistryError::NotFound("x".into()), StatusCode::NOT_FOUND)]
#[case(MinistryError::Validation("x".into()), StatusCode::BAD_REQUEST)]
#[case(MinistryError::Authentication("x".into()), StatusCode::UNAUTHORIZED)]
#[case(MinistryError::Configuration("x".into()), StatusCode::CONFLICT)]
#[case(MinistryError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: MinistryError, #[case] expected: StatusCode) {
    let response = AppError(error).into_response();
    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_is_transport() {
    let error: AppError = eyre::eyre!("socket closed").into();
    assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_admin_login() {
    let ctx = TestContext::demo();

    let valid: serde_json::Value = ctx
        .server
        .post("/api/admin/login")
        .json(&json!({ "password": DEFAULT_ADMIN_PASSWORD }))
        .await
        .json();
    assert_eq!(valid, json!({ "valid": true }));

    let invalid: serde_json::Value = ctx
        .server
        .post("/api/admin/login")
        .json(&json!({ "password": "1234" }))
        .await
        .json();
    assert_eq!(invalid, json!({ "valid": false }));
}
