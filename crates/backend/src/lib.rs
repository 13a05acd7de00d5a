//! # Ministry Backend
//!
//! Access to the spreadsheet backend that owns the schedule rows. The
//! [`ScheduleBackend`] trait is the seam: [`http::HttpBackend`] talks to the
//! deployed Apps Script endpoint, [`demo::DemoBackend`] serves a fixed
//! fixture, and [`mock::MockBackend`] stands in for either in tests.
//!
//! [`store::ScheduleStore`] is the local read cache the dashboard renders
//! from, and [`connection::ConnectionConfig`] decides which backend is used.

pub mod connection;
pub mod demo;
pub mod http;
pub mod store;
pub mod wire;

pub mod mock;

use async_trait::async_trait;
use ministry_core::errors::MinistryResult;
use ministry_core::models::schedule::{NewScheduleEntry, ScheduleEntry};

/// Read and write access to the authoritative schedule list.
///
/// Implementations normalize dates on the way in and out, and return reads
/// sorted by start date.
#[async_trait]
pub trait ScheduleBackend: Send + Sync {
    async fn read_schedules(&self) -> MinistryResult<Vec<ScheduleEntry>>;

    /// Creates a row and returns it with the id it was stored under.
    async fn create_schedule(&self, schedule: NewScheduleEntry) -> MinistryResult<ScheduleEntry>;

    async fn update_schedule(&self, schedule: ScheduleEntry) -> MinistryResult<()>;
}
