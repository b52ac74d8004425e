//! Display formatting for project timestamps and capture progress.
//!
//! Timestamps are rendered in UTC so the same string comes out of SSR and
//! hydration.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Naive date-times as written by Python's `isoformat()`, with either
/// separator and optional seconds and fraction.
const NAIVE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
    format_description!("[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
];

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// `YYYY-MM-DD HH:MM` in UTC, or `None` outside the representable range.
#[must_use]
pub fn format_timestamp(unix_seconds: i64) -> Option<String> {
    let at = OffsetDateTime::from_unix_timestamp(unix_seconds).ok()?;
    at.format(DISPLAY_FORMAT).ok()
}

/// Label for a project's creation time, or a dash when unknown.
#[must_use]
pub fn created_label(created: Option<i64>) -> String {
    created.and_then(format_timestamp).unwrap_or_else(|| "–".to_owned())
}

/// Parse an ISO 8601 date or date-time into unix seconds.
///
/// Zoned values (RFC 3339 or ISO 8601 with `Z`/`±HH:MM`) keep their offset.
/// Naive date-times and bare dates are taken as UTC.
#[must_use]
pub fn parse_iso_seconds(input: &str) -> Option<i64> {
    let input = input.trim();
    if let Ok(at) = OffsetDateTime::parse(input, &Rfc3339) {
        return Some(at.unix_timestamp());
    }
    if let Ok(at) = OffsetDateTime::parse(input, &Iso8601::DEFAULT) {
        return Some(at.unix_timestamp());
    }
    if let Some(at) = NAIVE_FORMATS.iter().find_map(|format| PrimitiveDateTime::parse(input, format).ok()) {
        return Some(at.assume_utc().unix_timestamp());
    }
    let date = Date::parse(input, DATE_FORMAT).ok()?;
    Some(date.midnight().assume_utc().unix_timestamp())
}

/// `Photo N of M` label for the capture progress bar.
#[must_use]
pub fn progress_label(completed: u32, total: u32) -> String {
    format!("Photo {completed} of {total}")
}

/// Progress as a CSS width percentage string.
#[must_use]
pub fn progress_percent(completed: u32, total: u32) -> String {
    if total == 0 {
        return "0%".to_owned();
    }
    let pct = f64::from(completed.min(total)) * 100.0 / f64::from(total);
    format!("{pct:.0}%")
}
