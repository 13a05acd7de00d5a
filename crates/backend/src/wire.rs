//! JSON shapes exchanged with the Apps Script endpoint.

use ministry_core::dates::normalize_date;
use ministry_core::models::schedule::{Priority, ScheduleEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row as the sheet returns it. Cells may be strings, numbers or empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub start_date: Value,
    #[serde(default)]
    pub end_date: Value,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub priority: Value,
    #[serde(default)]
    pub category: Value,
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn optional_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(cell_text(other)),
    }
}

impl From<RawRecord> for ScheduleEntry {
    fn from(raw: RawRecord) -> Self {
        ScheduleEntry {
            id: cell_text(&raw.id),
            start_date: normalize_date(&cell_text(&raw.start_date)),
            end_date: normalize_date(&cell_text(&raw.end_date)),
            content: cell_text(&raw.content),
            priority: Priority::from(cell_text(&raw.priority)),
            category: optional_cell(&raw.category),
        }
    }
}

/// Body of a POST to the endpoint, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum WriteRequest {
    Create {
        #[serde(flatten)]
        schedule: ScheduleEntry,
        status: &'static str,
    },
    Edit {
        #[serde(flatten)]
        schedule: ScheduleEntry,
    },
}

impl WriteRequest {
    pub fn create(schedule: ScheduleEntry) -> Self {
        WriteRequest::Create { schedule, status: "Auto" }
    }

    pub fn edit(schedule: ScheduleEntry) -> Self {
        WriteRequest::Edit { schedule }
    }
}

/// `{ "result": "success" | "error", "message": ... }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendReply {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BackendReply {
    pub fn error_message(&self) -> Option<String> {
        match self.result.as_deref() {
            Some("error") => Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| "The backend reported an error".to_string()),
            ),
            _ => None,
        }
    }
}
