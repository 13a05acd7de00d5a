use async_trait::async_trait;
use mockall::mock;
use ministry_core::errors::MinistryResult;
use ministry_core::models::schedule::{NewScheduleEntry, ScheduleEntry};

use crate::ScheduleBackend;

// Mock backend for testing
mock! {
    pub Backend {}

    #[async_trait]
    impl ScheduleBackend for Backend {
        async fn read_schedules(&self) -> MinistryResult<Vec<ScheduleEntry>>;

        async fn create_schedule(&self, schedule: NewScheduleEntry) -> MinistryResult<ScheduleEntry>;

        async fn update_schedule(&self, schedule: ScheduleEntry) -> MinistryResult<()>;
    }
}
