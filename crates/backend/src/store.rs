//! # Schedule store
//!
//! The local copy of the schedule list that the dashboard renders from. It
//! is a read cache: the backend stays authoritative, and the cache is
//! refreshed on demand or after a write.
//!
//! Writes follow two different policies:
//!
//! - **add** waits for the backend to confirm, then prepends the new row and
//!   re-sorts.
//! - **update** replaces the row locally first, then calls the backend. If
//!   the call fails the whole list is reloaded to discard the local change.

use ministry_core::dashboard::sort_by_start;
use ministry_core::errors::{MinistryError, MinistryResult};
use ministry_core::models::schedule::{NewScheduleEntry, ScheduleEntry};
use tokio::sync::RwLock;

use crate::ScheduleBackend;

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<ScheduleEntry>,
    last_error: Option<String>,
    loaded: bool,
}

#[derive(Debug, Default)]
pub struct ScheduleStore {
    state: RwLock<StoreState>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the cache, e.g. from a previous session.
    pub fn with_entries(mut entries: Vec<ScheduleEntry>) -> Self {
        sort_by_start(&mut entries);
        Self {
            state: RwLock::new(StoreState { entries, last_error: None, loaded: true }),
        }
    }

    pub async fn snapshot(&self) -> Vec<ScheduleEntry> {
        self.state.read().await.entries.clone()
    }

    /// Message of the most recent failed load, cleared by the next success.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.state.read().await.loaded
    }

    /// Replaces the cache with the backend's list.
    ///
    /// On failure the previous list is kept and the error message is
    /// remembered for display.
    pub async fn refresh(&self, backend: &dyn ScheduleBackend) -> MinistryResult<Vec<ScheduleEntry>> {
        match backend.read_schedules().await {
            Ok(mut entries) => {
                sort_by_start(&mut entries);
                let mut state = self.state.write().await;
                state.entries = entries.clone();
                state.last_error = None;
                state.loaded = true;
                tracing::info!("Loaded {} schedules", entries.len());
                Ok(entries)
            }
            Err(err) => {
                tracing::error!("Fetch failed: {}", err);
                self.state.write().await.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Records a load failure that happened before the backend was reached,
    /// such as a missing connection.
    pub async fn record_error(&self, err: &MinistryError) {
        self.state.write().await.last_error = Some(err.to_string());
    }

    pub async fn add(&self, backend: &dyn ScheduleBackend, schedule: NewScheduleEntry) -> MinistryResult<ScheduleEntry> {
        let created = backend.create_schedule(schedule).await.inspect_err(|err| {
            tracing::error!("Failed to add schedule: {}", err);
        })?;

        let mut state = self.state.write().await;
        state.entries.insert(0, created.clone());
        sort_by_start(&mut state.entries);

        Ok(created)
    }

    pub async fn update(&self, backend: &dyn ScheduleBackend, schedule: ScheduleEntry) -> MinistryResult<ScheduleEntry> {
        {
            let mut state = self.state.write().await;
            let slot = state
                .entries
                .iter_mut()
                .find(|entry| entry.id == schedule.id)
                .ok_or_else(|| MinistryError::NotFound(format!("Schedule with ID {} not found", schedule.id)))?;
            *slot = schedule.clone();
            sort_by_start(&mut state.entries);
        }

        if let Err(err) = backend.update_schedule(schedule.clone()).await {
            tracing::error!("Failed to update schedule {}: {}", schedule.id, err);
            if let Err(reload_err) = self.refresh(backend).await {
                tracing::warn!("Reload after failed update also failed: {}", reload_err);
            }
            return Err(err);
        }

        Ok(schedule)
    }
}
