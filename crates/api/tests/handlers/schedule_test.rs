use axum::http::{HeaderName, HeaderValue, StatusCode};
use ministry_core::models::schedule::{Priority, ScheduleEntry};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{admin_header, TestContext};

fn sheet_rows() -> serde_json::Value {
    json!([
        {
            "id": "a",
            "startDate": "2026.3.1",
            "endDate": "2026.3.5",
            "content": "Spring retreat",
            "priority": "High",
            "category": "General"
        },
        {
            "id": "b",
            "startDate": "2026-05-01",
            "endDate": "2026-05-02",
            "content": "Choir practice",
            "priority": "Low"
        }
    ])
}

async fn mount_read(server: &MockServer, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(query_param("action", "read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

fn new_entry() -> serde_json::Value {
    json!({
        "startDate": "2026.4.2",
        "endDate": "2026.4.3",
        "content": "Easter prep",
        "priority": "Medium"
    })
}

#[tokio::test]
async fn test_list_is_empty_before_first_load() {
    let ctx = TestContext::demo();

    let entries: Vec<ScheduleEntry> = ctx.server.get("/api/schedules").await.json();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_refresh_normalizes_and_lists() {
    let mock_server = MockServer::start().await;
    mount_read(&mock_server, sheet_rows()).await;
    let ctx = TestContext::remote(mock_server.uri());

    ctx.server.post("/api/schedules/refresh").await.assert_status_ok();

    let entries: Vec<ScheduleEntry> = ctx.server.get("/api/schedules").await.json();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(entries[0].start_date, "2026-03-01");
    assert_eq!(entries[1].priority, Priority::Low);
}

#[tokio::test]
async fn test_refresh_without_connection_is_unavailable() {
    let ctx = TestContext::disconnected();

    let response = ctx.server.post("/api/schedules/refresh").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No backend URL is configured");
}

#[tokio::test]
async fn test_create_requires_admin_password() {
    let ctx = TestContext::demo();

    let response = ctx.server.post("/api/schedules").json(&new_entry()).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .server
        .post("/api/schedules")
        .add_header(
            HeaderName::from_static("x-admin-password"),
            HeaderValue::from_static("wrong"),
        )
        .json(&new_entry())
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Authentication error: Invalid admin password");
}

#[tokio::test]
async fn test_create_rejects_blank_content() {
    let ctx = TestContext::demo();
    let (name, value) = admin_header();

    let response = ctx
        .server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&json!({ "startDate": "2026-04-02", "endDate": "2026-04-03", "content": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_in_demo_mode() {
    let ctx = TestContext::demo();
    let (name, value) = admin_header();

    let response = ctx
        .server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&new_entry())
        .await;
    response.assert_status_ok();

    let created: ScheduleEntry = response.json();
    assert!(created.id.starts_with("demo-"));
    assert_eq!(created.start_date, "2026-04-02");
    assert_eq!(created.end_date, "2026-04-03");
}

#[tokio::test]
async fn test_create_posts_to_sheet_and_reloads() {
    let mock_server = MockServer::start().await;
    mount_read(&mock_server, sheet_rows()).await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "action": "create",
            "status": "Auto",
            "startDate": "2026-04-02",
            "content": "Easter prep"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "success" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let ctx = TestContext::remote(mock_server.uri());
    let (name, value) = admin_header();

    let response = ctx
        .server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&new_entry())
        .await;
    response.assert_status_ok();

    let created: ScheduleEntry = response.json();
    assert_eq!(created.id.len(), 9);

    // The reload replaced the optimistic list with what the sheet returned.
    let entries: Vec<ScheduleEntry> = ctx.server.get("/api/schedules").await.json();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_update_sends_edit() {
    let mock_server = MockServer::start().await;
    mount_read(&mock_server, sheet_rows()).await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "action": "edit",
            "id": "b",
            "startDate": "2026-06-01",
            "content": "Choir concert"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "success" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let ctx = TestContext::remote(mock_server.uri());
    ctx.server.post("/api/schedules/refresh").await.assert_status_ok();
    let (name, value) = admin_header();

    let response = ctx
        .server
        .put("/api/schedules/b")
        .add_header(name, value)
        .json(&json!({
            "startDate": "2026.6.1",
            "endDate": "2026.6.1",
            "content": "Choir concert",
            "priority": "High"
        }))
        .await;
    response.assert_status_ok();

    let updated: ScheduleEntry = response.json();
    assert_eq!(updated.id, "b");
    assert_eq!(updated.start_date, "2026-06-01");

    let entries: Vec<ScheduleEntry> = ctx.server.get("/api/schedules").await.json();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(entries[1].content, "Choir concert");
}

#[test_log::test(tokio::test)]
async fn test_failed_update_restores_sheet_state() {
    let mock_server = MockServer::start().await;
    mount_read(&mock_server, sheet_rows()).await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": "error", "message": "ID not found" })),
        )
        .mount(&mock_server)
        .await;
    let ctx = TestContext::remote(mock_server.uri());
    ctx.server.post("/api/schedules/refresh").await.assert_status_ok();
    let (name, value) = admin_header();

    let response = ctx
        .server
        .put("/api/schedules/a")
        .add_header(name, value)
        .json(&json!({
            "startDate": "2027-01-01",
            "endDate": "2027-01-02",
            "content": "Moved"
        }))
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Backend error: ID not found");

    let entries: Vec<ScheduleEntry> = ctx.server.get("/api/schedules").await.json();
    assert_eq!(entries[0].id, "a");
    assert_eq!(entries[0].content, "Spring retreat");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let ctx = TestContext::demo();
    ctx.server.post("/api/schedules/refresh").await.assert_status_ok();
    let (name, value) = admin_header();

    let response = ctx
        .server
        .put("/api/schedules/missing")
        .add_header(name, value)
        .json(&new_entry())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
