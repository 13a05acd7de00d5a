//! # Date rules
//!
//! Schedule dates are calendar days without a time component. They travel as
//! text (`YYYY-MM-DD` once normalized) and are only ever interpreted through
//! their integer components, so no timezone conversion can shift a day.

use chrono::{Days, NaiveDate};

use crate::models::schedule::Classification;

/// Brings spreadsheet date text into canonical `YYYY-MM-DD` form.
///
/// Dotted input such as `2026. 2. 1` or `2026.02.01` is rewritten with
/// zero-padded month and day. Any other shape is returned trimmed but
/// otherwise unchanged; callers must tolerate unnormalized text.
///
/// # Example
///
/// ```
/// use ministry_core::dates::normalize_date;
///
/// assert_eq!(normalize_date("2026.2.1"), "2026-02-01");
/// assert_eq!(normalize_date("2026-03-10"), "2026-03-10");
/// ```
pub fn normalize_date(raw: &str) -> String {
    let text = raw.trim();

    if text.contains('.') {
        let parts: Vec<&str> = text.split('.').map(str::trim).collect();
        if parts.len() >= 3 {
            return format!("{}-{:0>2}-{:0>2}", parts[0], parts[1], parts[2]);
        }
    }

    text.to_string()
}

/// A blank component reads as zero.
fn component(part: &str) -> Option<i64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0);
    }
    part.parse().ok()
}

/// Parses `Y-M-D` text into a calendar date from its integer components.
///
/// Out-of-range months and days roll over into the following period, so
/// `2026-02-30` is the 2nd of March and `2026-03-` the last day of February.
/// Returns `None` when the text does not carry three integer components or
/// the result is outside the representable calendar.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('-').map(component);
    let year = parts.next()??;
    let month = parts.next()??;
    let day = parts.next()??;

    // Month 0 is December of the previous year, month 13 January of the next.
    let month_index = month.checked_sub(1)?;
    let year = i32::try_from(year.checked_add(month_index.div_euclid(12))?).ok()?;
    let month = u32::try_from(month_index.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Derives the status of an inclusive date range relative to `today`.
///
/// The range covers whole days: it starts at the first moment of
/// `start_date` and ends at the last moment of `end_date`. A date that cannot
/// be parsed never compares as before or after anything, which leaves the
/// entry `Past`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use ministry_core::dates::classify;
/// use ministry_core::models::schedule::DateStatus;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
/// let result = classify("2026-03-01", "2026-03-10", today);
/// assert_eq!(result.status, DateStatus::Upcoming);
/// assert_eq!(result.days_until, Some(9));
/// ```
pub fn classify(start_date: &str, end_date: &str, today: NaiveDate) -> Classification {
    let start = parse_calendar_date(start_date);
    let end = parse_calendar_date(end_date);

    match (start, end) {
        (Some(start), Some(end)) if start <= today && today <= end => Classification::active(),
        (Some(start), _) if today < start => {
            Classification::upcoming((start - today).num_days())
        }
        _ => Classification::past(),
    }
}
