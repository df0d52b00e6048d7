//! Date parsing and calendar arithmetic for Bitrix timestamps

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Parse a Bitrix timestamp into the wall-clock time it was written in.
///
/// Bitrix emits ISO-8601 with the portal offset (`2025-03-10T12:00:00+04:00`);
/// the offset is kept as written so month boundaries match what CRM users
/// see. Plain `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` and the Russian-locale
/// `DD.MM.YYYY` forms are accepted as well.
#[must_use]
pub fn parse_bitrix_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d.%m.%Y"))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Whole calendar months between two dates, regardless of order.
///
/// A month only counts once the day-of-month has been reached again, so
/// 31 Jan → 29 Feb is 0 months and 15 Jan → 15 Mar is 2.
#[must_use]
pub fn whole_months_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    u32::try_from(months.max(0)).unwrap_or_default()
}

/// English month name (`"March"`).
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month.checked_sub(1).and_then(|idx| NAMES.get(idx as usize)).copied().unwrap_or_default()
}
