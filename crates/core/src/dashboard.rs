//! # Dashboard aggregation
//!
//! Pure functions that turn the cached entry list into what the dashboard
//! shows: notices split from regular items, derived statuses, per-status
//! counts, chart slices and month groups. Nothing here can fail; malformed
//! rows degrade by dropping out of the month groups.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dates::{classify, parse_calendar_date};
use crate::models::dashboard::{ChartSlice, DashboardStats, DashboardView, MonthGroup, StatusFilter};
use crate::models::schedule::{Classification, ClassifiedEntry, DateStatus, ScheduleEntry};

/// Category values (after trimming and lower-casing) that mark a notice.
pub const NOTICE_CATEGORIES: [&str; 4] = ["notice", "공지", "notification", "알림"];

pub fn is_notice(category: Option<&str>) -> bool {
    category
        .map(|c| c.trim().to_lowercase())
        .is_some_and(|c| NOTICE_CATEGORIES.contains(&c.as_str()))
}

/// Splits entries into `(regular, notices)`, preserving order in both.
pub fn partition(entries: &[ScheduleEntry]) -> (Vec<ScheduleEntry>, Vec<ScheduleEntry>) {
    entries
        .iter()
        .cloned()
        .partition(|entry| !is_notice(entry.category.as_deref()))
}

/// Sorts by start date ascending. Stable, so entries sharing a start date
/// keep their relative order; unparseable dates sort last.
pub fn sort_by_start(entries: &mut [ScheduleEntry]) {
    entries.sort_by_key(|entry| {
        let start = parse_calendar_date(&entry.start_date);
        (start.is_none(), start)
    });
}

pub fn status_label(classification: &Classification) -> String {
    match classification.status {
        DateStatus::Active => "진행 중 (ON)".to_string(),
        DateStatus::Upcoming => match classification.days_until {
            Some(days) if days > 0 => format!("D-{}", days),
            _ => "예정".to_string(),
        },
        DateStatus::Past => "종료됨".to_string(),
    }
}

pub fn classify_entries(regular: Vec<ScheduleEntry>, today: NaiveDate) -> Vec<ClassifiedEntry> {
    regular
        .into_iter()
        .map(|entry| {
            let classification = classify(&entry.start_date, &entry.end_date, today);
            ClassifiedEntry {
                label: status_label(&classification),
                status: classification.status,
                days_until: classification.days_until,
                entry,
            }
        })
        .collect()
}

pub fn compute_stats(classified: &[ClassifiedEntry]) -> DashboardStats {
    classified.iter().fold(
        DashboardStats { total: classified.len(), ..DashboardStats::default() },
        |mut stats, item| {
            match item.status {
                DateStatus::Active => stats.active += 1,
                DateStatus::Upcoming => stats.upcoming += 1,
                DateStatus::Past => stats.past += 1,
            }
            stats
        },
    )
}

pub fn apply_filter(classified: &[ClassifiedEntry], filter: StatusFilter) -> Vec<ClassifiedEntry> {
    classified
        .iter()
        .filter(|item| filter.matches(item.status))
        .cloned()
        .collect()
}

/// Pie chart slices, in Active/Upcoming/Past order, without empty slices.
pub fn chart_data(stats: &DashboardStats) -> Vec<ChartSlice> {
    [
        ("Active", stats.active, "#3B82F6"),
        ("Upcoming", stats.upcoming, "#F97316"),
        ("Past", stats.past, "#9CA3AF"),
    ]
    .into_iter()
    .filter(|(_, value, _)| *value > 0)
    .map(|(name, value, color)| ChartSlice {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

/// Heading shown above a month's items during the festival season.
pub fn month_theme(month: u32) -> String {
    match month {
        2 => "기획 단계 (Planning)".to_string(),
        3 => "제작 및 발주 (Production)".to_string(),
        4 => "동기부여 (Motivation)".to_string(),
        5 => "새생명 축제 일정".to_string(),
        _ => format!("{}월 사역", month),
    }
}

/// Reads the leading integer of a date component (`"03"` -> 3, `"3x"` -> 3).
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

fn month_key(start_date: &str) -> Option<(i32, u32)> {
    let mut parts = start_date.split('-');
    let year = leading_int(parts.next()?)?;
    let month = leading_int(parts.next()?)?;
    Some((i32::try_from(year).ok()?, u32::try_from(month).ok()?))
}

/// Groups items by the (year, month) of their start date text.
///
/// Groups come back in ascending order; inside a group the incoming order is
/// kept. Items whose start date has no readable year and month are dropped.
pub fn group_by_month(items: Vec<ClassifiedEntry>) -> Vec<MonthGroup> {
    let mut groups: BTreeMap<(i32, u32), Vec<ClassifiedEntry>> = BTreeMap::new();

    for item in items {
        match month_key(&item.entry.start_date) {
            Some(key) => groups.entry(key).or_default().push(item),
            None => tracing::debug!(
                "Leaving entry {} out of month groups: unreadable start date {:?}",
                item.entry.id,
                item.entry.start_date
            ),
        }
    }

    groups
        .into_iter()
        .map(|((year, month), items)| MonthGroup {
            year,
            month,
            theme: month_theme(month),
            items,
        })
        .collect()
}

/// Runs the full pipeline over the cached list for one render pass.
pub fn build_view(
    entries: &[ScheduleEntry],
    today: NaiveDate,
    filter: StatusFilter,
    error: Option<String>,
) -> DashboardView {
    let (regular, notices) = partition(entries);
    let classified = classify_entries(regular, today);
    let stats = compute_stats(&classified);
    let groups = group_by_month(apply_filter(&classified, filter));

    DashboardView {
        today,
        filter,
        chart: chart_data(&stats),
        stats,
        notices,
        groups,
        error,
    }
}
