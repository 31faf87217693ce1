//! Date helpers shared by report filters and tables.

use chrono::{DateTime, Datelike, Duration, NaiveDate};

/// Render an RFC 3339 timestamp as "YYYY-MM-DD HH:MM" (UTC).
/// Strings that do not parse are returned unchanged.
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.naive_utc().format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// First and last day of the given month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Bounds of the month preceding the one containing `date`.
pub fn previous_month_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    month_bounds(year, month)
}

/// Parse the `yyyy-mm-dd` value of a native date input.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2026-10-18T14:02:26Z"), "2026-10-18 14:02");
        assert_eq!(
            format_timestamp("2026-10-18T14:02:26.123+02:00"),
            "2026-10-18 12:02"
        );
        assert_eq!(format_timestamp("invalid"), "invalid");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2026, 2), Some((d(2026, 2, 1), d(2026, 2, 28))));
        assert_eq!(month_bounds(2024, 2), Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(month_bounds(2026, 12), Some((d(2026, 12, 1), d(2026, 12, 31))));
        assert_eq!(month_bounds(2026, 13), None);
    }

    #[test]
    fn test_previous_month_wraps_year() {
        assert_eq!(
            previous_month_bounds(d(2026, 1, 15)),
            Some((d(2025, 12, 1), d(2025, 12, 31)))
        );
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2026-10-01"), Some(d(2026, 10, 1)));
        assert_eq!(parse_input_date(""), None);
    }
}
