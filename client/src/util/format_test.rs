use super::*;

// =============================================================
// format_timestamp
// =============================================================

#[test]
fn format_timestamp_renders_utc_minutes() {
    // 2023-11-14 22:13:20 UTC
    assert_eq!(format_timestamp(1_700_000_000).as_deref(), Some("2023-11-14 22:13"));
}

#[test]
fn format_timestamp_out_of_range_is_none() {
    assert_eq!(format_timestamp(i64::MAX), None);
    assert_eq!(created_label(Some(i64::MIN)), "–");
}

#[test]
fn created_label_handles_missing() {
    assert_eq!(created_label(None), "–");
    assert_eq!(created_label(Some(0)), "1970-01-01 00:00");
}

// =============================================================
// parse_iso_seconds
// =============================================================

#[test]
fn parses_date_only() {
    assert_eq!(parse_iso_seconds("1970-01-02"), Some(86_400));
}

#[test]
fn parses_zulu_datetime() {
    assert_eq!(parse_iso_seconds("2023-11-14T22:13:20Z"), Some(1_700_000_000));
}

#[test]
fn parses_python_isoformat_with_fraction() {
    assert_eq!(parse_iso_seconds("2023-11-14 22:13:20.123456"), Some(1_700_000_000));
}

#[test]
fn applies_positive_offset() {
    assert_eq!(parse_iso_seconds("2023-11-14T23:13:20+01:00"), Some(1_700_000_000));
}

#[test]
fn applies_negative_offset() {
    assert_eq!(parse_iso_seconds("2023-11-14T17:13:20-05:00"), Some(1_700_000_000));
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_iso_seconds("yesterday"), None);
    assert_eq!(parse_iso_seconds("2023-13-01"), None);
    assert_eq!(parse_iso_seconds("2023-11-14T25:00"), None);
    assert_eq!(parse_iso_seconds(""), None);
}

#[test]
fn multibyte_offset_is_rejected_without_panicking() {
    assert_eq!(parse_iso_seconds("2024-01-01T10:00+1é2"), None);
    assert_eq!(parse_iso_seconds("2024-01-01T10:00+é"), None);
    assert_eq!(parse_iso_seconds("2024-01-01T10:00:00Zé"), None);
}

#[test]
fn parses_naive_minutes_and_leap_day() {
    assert_eq!(parse_iso_seconds("2024-02-29T00:00"), Some(1_709_164_800));
    assert_eq!(parse_iso_seconds("1969-12-31"), Some(-86_400));
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_label_formats_counts() {
    assert_eq!(progress_label(3, 24), "Photo 3 of 24");
}

#[test]
fn progress_percent_rounds_and_clamps() {
    assert_eq!(progress_percent(0, 24), "0%");
    assert_eq!(progress_percent(12, 24), "50%");
    assert_eq!(progress_percent(1, 3), "33%");
    assert_eq!(progress_percent(30, 24), "100%");
    assert_eq!(progress_percent(1, 0), "0%");
}
