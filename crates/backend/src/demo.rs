use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, NaiveDate, Utc};
use ministry_core::dashboard::sort_by_start;
use ministry_core::dates::normalize_date;
use ministry_core::errors::MinistryResult;
use ministry_core::models::schedule::{NewScheduleEntry, Priority, ScheduleEntry};

use crate::ScheduleBackend;

pub const DEFAULT_DEMO_LATENCY: Duration = Duration::from_millis(600);

/// The rows served in demo mode. The last one always falls on `today`.
pub fn demo_fixture(today: NaiveDate) -> Vec<ScheduleEntry> {
    let today = today.format("%Y-%m-%d").to_string();
    let row = |id: &str, start: &str, end: &str, content: &str, priority, category: &str| ScheduleEntry {
        id: id.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        content: content.to_string(),
        priority,
        category: Some(category.to_string()),
    };

    vec![
        row("demo-1", "2026-02-01", "2026-02-28", "새생명축제 기획안 확정 및 팀 구성", Priority::High, "General"),
        row("demo-2", "2026-03-10", "2026-03-15", "홍보 영상 촬영 및 제작 시작", Priority::Medium, "General"),
        row("demo-3", "2026-03-20", "2026-03-20", "전체 교구 연합 기도회", Priority::High, "Notice"),
        row("demo-4", &today, &today, "중간 점검 회의 (데모 데이터)", Priority::Medium, "General"),
    ]
}

/// Backend substitute that serves [`demo_fixture`] without any network
/// traffic. Writes are acknowledged but not kept.
#[derive(Debug, Clone)]
pub struct DemoBackend {
    latency: Duration,
}

impl DemoBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new(DEFAULT_DEMO_LATENCY)
    }
}

#[async_trait]
impl ScheduleBackend for DemoBackend {
    async fn read_schedules(&self) -> MinistryResult<Vec<ScheduleEntry>> {
        self.simulate_latency().await;
        let mut schedules = demo_fixture(Local::now().date_naive());
        sort_by_start(&mut schedules);
        Ok(schedules)
    }

    async fn create_schedule(&self, schedule: NewScheduleEntry) -> MinistryResult<ScheduleEntry> {
        self.simulate_latency().await;

        let mut created = schedule.with_id(format!("demo-{}", Utc::now().timestamp_millis()));
        created.start_date = normalize_date(&created.start_date);
        created.end_date = normalize_date(&created.end_date);

        tracing::debug!("Demo backend accepted new schedule {}", created.id);
        Ok(created)
    }

    async fn update_schedule(&self, schedule: ScheduleEntry) -> MinistryResult<()> {
        self.simulate_latency().await;
        tracing::debug!("Demo backend accepted edit of {}", schedule.id);
        Ok(())
    }
}
