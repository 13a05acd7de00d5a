//! Client for the Apps Script web app that fronts the schedule sheet.
//!
//! Reads are `GET {url}?action=read`. Writes are `POST {url}` with a JSON
//! body sent as plain text, which is what the script's `doPost` parses.

use async_trait::async_trait;
use eyre::WrapErr;
use ministry_core::dashboard::sort_by_start;
use ministry_core::dates::normalize_date;
use ministry_core::errors::{MinistryError, MinistryResult};
use ministry_core::models::schedule::{NewScheduleEntry, ScheduleEntry};
use rand::Rng;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::ScheduleBackend;
use crate::wire::{BackendReply, RawRecord, WriteRequest};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 9;

/// Generates a row id: nine random base-36 characters.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    url: String,
}

impl HttpBackend {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    async fn post(&self, request: &WriteRequest) -> MinistryResult<()> {
        let body = serde_json::to_string(request)
            .map_err(|e| MinistryError::Internal(Box::new(e)))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .wrap_err("Failed to reach the schedule backend")?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre::eyre!("Schedule backend answered {}", status).into());
        }

        let reply: BackendReply = response
            .json()
            .await
            .wrap_err("Schedule backend returned malformed JSON")?;

        match reply.error_message() {
            Some(message) => Err(MinistryError::Backend(message)),
            None => Ok(()),
        }
    }
}

fn normalized(mut schedule: ScheduleEntry) -> ScheduleEntry {
    schedule.start_date = normalize_date(&schedule.start_date);
    schedule.end_date = normalize_date(&schedule.end_date);
    schedule
}

#[async_trait]
impl ScheduleBackend for HttpBackend {
    async fn read_schedules(&self) -> MinistryResult<Vec<ScheduleEntry>> {
        tracing::debug!("Reading schedules from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&[("action", "read")])
            .send()
            .await
            .wrap_err("Failed to reach the schedule backend")?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre::eyre!("Failed to fetch schedules: backend answered {}", status).into());
        }

        let payload: Value = response
            .json()
            .await
            .wrap_err("Schedule backend returned malformed JSON")?;

        if let Value::Object(_) = &payload {
            let reply: BackendReply = serde_json::from_value(payload.clone()).unwrap_or_default();
            if let Some(message) = reply.error_message() {
                return Err(MinistryError::Backend(message));
            }
        }

        let records: Vec<RawRecord> = serde_json::from_value(payload)
            .wrap_err("Schedule backend returned an unexpected payload")?;

        let mut schedules: Vec<ScheduleEntry> = records.into_iter().map(ScheduleEntry::from).collect();
        sort_by_start(&mut schedules);

        tracing::debug!("Read {} schedules", schedules.len());
        Ok(schedules)
    }

    async fn create_schedule(&self, schedule: NewScheduleEntry) -> MinistryResult<ScheduleEntry> {
        let schedule = normalized(schedule.with_id(generate_id()));
        tracing::info!("Creating schedule {} starting {}", schedule.id, schedule.start_date);

        self.post(&WriteRequest::create(schedule.clone())).await?;
        Ok(schedule)
    }

    async fn update_schedule(&self, schedule: ScheduleEntry) -> MinistryResult<()> {
        let schedule = normalized(schedule);
        tracing::info!("Updating schedule {}", schedule.id);

        self.post(&WriteRequest::edit(schedule)).await
    }
}
