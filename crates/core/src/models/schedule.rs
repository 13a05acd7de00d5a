use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Sheet cells are typed by hand, so anything unrecognised lands on Medium.
impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            other => {
                tracing::warn!("Unknown priority {:?}, treating as Medium", other);
                Priority::Medium
            }
        }
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.as_str().to_string()
    }
}

/// One ministry activity row as stored in the backend sheet.
///
/// Dates are kept as text. They are normalized to `YYYY-MM-DD` at the fetch
/// boundary, but malformed cells are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub content: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Create payload: a schedule entry before the backend has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleEntry {
    pub start_date: String,
    pub end_date: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewScheduleEntry {
    pub fn with_id(self, id: impl Into<String>) -> ScheduleEntry {
        ScheduleEntry {
            id: id.into(),
            start_date: self.start_date,
            end_date: self.end_date,
            content: self.content,
            priority: self.priority,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateStatus {
    Active,
    Upcoming,
    Past,
}

impl fmt::Display for DateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateStatus::Active => "Active",
            DateStatus::Upcoming => "Upcoming",
            DateStatus::Past => "Past",
        };
        f.write_str(name)
    }
}

/// Result of comparing an entry's date range against today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub status: DateStatus,
    /// Whole days until the start date; only set for `Upcoming`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until: Option<i64>,
}

impl Classification {
    pub fn active() -> Self {
        Self { status: DateStatus::Active, days_until: None }
    }

    pub fn upcoming(days_until: i64) -> Self {
        Self { status: DateStatus::Upcoming, days_until: Some(days_until) }
    }

    pub fn past() -> Self {
        Self { status: DateStatus::Past, days_until: None }
    }
}

/// A regular entry with the attributes derived for a single render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEntry {
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    pub status: DateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until: Option<i64>,
    pub label: String,
}
