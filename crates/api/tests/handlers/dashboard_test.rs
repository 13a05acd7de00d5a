use axum::http::StatusCode;
use ministry_core::models::dashboard::{DashboardView, StatusFilter};
use ministry_core::models::schedule::DateStatus;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{days_from_today, TestContext};

async fn mount_rows(server: &MockServer, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(query_param("action", "read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

fn rows() -> serde_json::Value {
    json!([
        {
            "id": "past",
            "startDate": days_from_today(-40),
            "endDate": days_from_today(-35),
            "content": "지난 사역",
            "priority": "Low",
            "category": "General"
        },
        {
            "id": "now",
            "startDate": days_from_today(-1),
            "endDate": days_from_today(1),
            "content": "진행 중인 사역",
            "priority": "High"
        },
        {
            "id": "soon",
            "startDate": days_from_today(9),
            "endDate": days_from_today(12),
            "content": "다가오는 사역",
            "priority": "Medium",
            "category": "Planning"
        },
        {
            "id": "notice",
            "startDate": days_from_today(0),
            "endDate": days_from_today(30),
            "content": "공지사항",
            "priority": "High",
            "category": "공지"
        }
    ])
}

#[tokio::test]
async fn test_dashboard_loads_on_first_visit() {
    let mock_server = MockServer::start().await;
    mount_rows(&mock_server, rows()).await;
    let ctx = TestContext::remote(format!("{}/exec", mock_server.uri()));

    let response = ctx.server.get("/api/dashboard").await;
    response.assert_status_ok();
    let view: DashboardView = response.json();

    assert_eq!(view.filter, StatusFilter::All);
    assert_eq!(view.stats.total, 3);
    assert_eq!((view.stats.active, view.stats.upcoming, view.stats.past), (1, 1, 1));
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].id, "notice");
    assert_eq!(view.chart.len(), 3);
    assert_eq!(view.error, None);

    let soon = view
        .groups
        .iter()
        .flat_map(|g| g.items.iter())
        .find(|item| item.entry.id == "soon")
        .expect("upcoming entry is listed");
    assert_eq!(soon.status, DateStatus::Upcoming);
    assert_eq!(soon.days_until, Some(9));
    assert_eq!(soon.label, "D-9");
}

#[tokio::test]
async fn test_dashboard_filter_keeps_stats() {
    let mock_server = MockServer::start().await;
    mount_rows(&mock_server, rows()).await;
    let ctx = TestContext::remote(format!("{}/exec", mock_server.uri()));

    let view: DashboardView = ctx
        .server
        .get("/api/dashboard")
        .add_query_param("filter", "past")
        .await
        .json();

    assert_eq!(view.filter, StatusFilter::Past);
    assert_eq!(view.stats.total, 3);
    let listed: Vec<String> = view
        .groups
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.entry.id.clone()))
        .collect();
    assert_eq!(listed, vec!["past".to_string()]);
}

#[tokio::test]
async fn test_dashboard_rejects_unknown_filter() {
    let ctx = TestContext::demo();

    let response = ctx.server.get("/api/dashboard").add_query_param("filter", "someday").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_without_connection_reports_error() {
    let ctx = TestContext::disconnected();

    let response = ctx.server.get("/api/dashboard").await;
    response.assert_status_ok();
    let view: DashboardView = response.json();

    assert_eq!(view.stats.total, 0);
    assert!(view.groups.is_empty());
    assert_eq!(view.error.as_deref(), Some("No backend URL is configured"));
}

#[tokio::test]
async fn test_dashboard_surfaces_backend_message() {
    let mock_server = MockServer::start().await;
    mount_rows(&mock_server, json!({ "result": "error", "message": "Sheet not shared" })).await;
    let ctx = TestContext::remote(format!("{}/exec", mock_server.uri()));

    let view: DashboardView = ctx.server.get("/api/dashboard").await.json();
    assert_eq!(view.error.as_deref(), Some("Backend error: Sheet not shared"));
}

#[tokio::test]
async fn test_demo_dashboard_counts_add_up() {
    let ctx = TestContext::demo();

    let view: DashboardView = ctx.server.get("/api/dashboard").await.json();

    assert_eq!(view.stats.total, 3);
    assert_eq!(view.notices.len(), 1);
    assert!(view.stats.active >= 1);
    assert_eq!(view.stats.total, view.stats.active + view.stats.upcoming + view.stats.past);
}

#[tokio::test]
async fn test_health_reports_cache() {
    let ctx = TestContext::demo();
    ctx.server.post("/api/schedules/refresh").await.assert_status_ok();

    let health: serde_json::Value = ctx.server.get("/health").await.json();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["connected"], true);
    assert_eq!(health["cached_entries"], 4);
}
