use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::MinistryError;
use crate::models::schedule::{ClassifiedEntry, DateStatus, ScheduleEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub upcoming: usize,
    pub past: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Upcoming,
    Past,
}

impl StatusFilter {
    pub fn matches(&self, status: DateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == DateStatus::Active,
            StatusFilter::Upcoming => status == DateStatus::Upcoming,
            StatusFilter::Past => status == DateStatus::Past,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Upcoming => "Upcoming",
            StatusFilter::Past => "Past",
        };
        f.write_str(name)
    }
}

impl FromStr for StatusFilter {
    type Err = MinistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "upcoming" => Ok(StatusFilter::Upcoming),
            "past" => Ok(StatusFilter::Past),
            other => Err(MinistryError::Validation(format!("Unknown status filter: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub theme: String,
    pub items: Vec<ClassifiedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: usize,
    pub color: String,
}

/// Everything the dashboard page shows for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub today: NaiveDate,
    pub filter: StatusFilter,
    pub stats: DashboardStats,
    pub chart: Vec<ChartSlice>,
    pub notices: Vec<ScheduleEntry>,
    pub groups: Vec<MonthGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
