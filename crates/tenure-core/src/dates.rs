// Rust guideline compliant 2026-10-12

//! Date normalization between display and storage formats.
//!
//! Dates travel in two shapes:
//!
//! - Display / edit form: `DD/MM/YYYY`
//! - Storage form: `YYYY-MM-DD`
//!
//! Nothing in this module fails. Unparseable input degrades to a day count
//! of `0` or to an absent storage value, and the fallback is reported at
//! `debug` level so it can be traced without changing behavior.

use chrono::{Local, NaiveDate};
use tracing::debug;

/// Separator used by the display format (`DD/MM/YYYY`).
pub const DISPLAY_SEPARATOR: char = '/';

/// Separator used by the storage format (`YYYY-MM-DD`).
pub const STORAGE_SEPARATOR: char = '-';

/// Returns today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a date in either `DD/MM/YYYY` or `YYYY-MM-DD` form.
///
/// The format is chosen by separator. Input that does not split into exactly
/// three numeric components, or that names a day the calendar does not have,
/// yields `None`.
///
/// # Arguments
///
/// * `value` - Date string in display or storage form
///
/// # Returns
///
/// The calendar date, or `None` if the input is empty or malformed.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let (separator, day_first) = if value.contains(DISPLAY_SEPARATOR) {
        (DISPLAY_SEPARATOR, true)
    } else if value.contains(STORAGE_SEPARATOR) {
        (STORAGE_SEPARATOR, false)
    } else {
        return None;
    };

    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != 3 {
        return None;
    }

    let (year, month, day) = if day_first {
        (parts[2], parts[1], parts[0])
    } else {
        (parts[0], parts[1], parts[2])
    };

    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Computes the signed number of days from `today` to the given date.
///
/// Positive values are days until the date, negative values are days since
/// it passed. Empty or unparseable input returns `0`, the same value as a
/// date equal to `today`.
///
/// # Arguments
///
/// * `value` - Date string in display or storage form
/// * `today` - Reference date
///
/// # Returns
///
/// The signed day count.
pub fn days_until(value: &str, today: NaiveDate) -> i64 {
    if value.is_empty() {
        return 0;
    }

    match parse_date(value) {
        Some(target) => (target - today).num_days(),
        None => {
            debug!(value, "unparseable date, treating as due today");
            0
        }
    }
}

/// Computes the signed number of days from the local current date to the
/// given date.
///
/// See [`days_until`] for the fallback rules.
pub fn parse_to_day_count(value: &str) -> i64 {
    days_until(value, today())
}

/// Converts a storage date (`YYYY-MM-DD`) to display form (`DD/MM/YYYY`).
///
/// Empty input yields an empty string. Input without exactly three
/// hyphen-separated parts is returned unchanged.
pub fn to_display(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = value.split(STORAGE_SEPARATOR).collect();
    if parts.len() != 3 {
        debug!(value, "storage date has unexpected shape, leaving as is");
        return value.to_string();
    }

    format!(
        "{}{sep}{}{sep}{}",
        parts[2],
        parts[1],
        parts[0],
        sep = DISPLAY_SEPARATOR
    )
}

/// Converts a display date (`DD/MM/YYYY`) to storage form (`YYYY-MM-DD`).
///
/// # Returns
///
/// `None` when the input is empty or does not have exactly three
/// slash-separated parts, meaning the field should not be written.
pub fn to_storage(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let parts: Vec<&str> = value.split(DISPLAY_SEPARATOR).collect();
    if parts.len() != 3 {
        debug!(value, "display date has unexpected shape, not writing it");
        return None;
    }

    Some(format!(
        "{}{sep}{}{sep}{}",
        parts[2],
        parts[1],
        parts[0],
        sep = STORAGE_SEPARATOR
    ))
}

/// Formats a calendar date in display form.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a calendar date in storage form.
pub fn format_storage(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_both_formats() {
        assert_eq!(parse_date("15/06/2030"), Some(date(2030, 6, 15)));
        assert_eq!(parse_date("2030-06-15"), Some(date(2030, 6, 15)));
        assert_eq!(parse_date("5/6/2030"), Some(date(2030, 6, 5)));
    }

    #[test]
    fn test_parse_date_rejects_malformed() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("15/06"), None);
        assert_eq!(parse_date("2030-06-15-01"), None);
        assert_eq!(parse_date("31/02/2030"), None);
        assert_eq!(parse_date("20300615"), None);
    }

    #[test]
    fn test_days_until_signs() {
        let today = date(2030, 6, 10);
        assert_eq!(days_until("15/06/2030", today), 5);
        assert_eq!(days_until("2030-06-05", today), -5);
        assert_eq!(days_until("10/06/2030", today), 0);
    }

    #[test]
    fn test_days_until_fallback_is_zero() {
        let today = date(2030, 6, 10);
        assert_eq!(days_until("", today), 0);
        assert_eq!(days_until("garbage", today), 0);
        assert_eq!(days_until("aa/bb/cccc", today), 0);
    }

    #[test]
    fn test_days_until_spans_years() {
        let today = date(2029, 12, 31);
        assert_eq!(days_until("01/01/2030", today), 1);
        assert_eq!(days_until("2031-01-01", today), 366);
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display("2030-06-15"), "15/06/2030");
        assert_eq!(to_display(""), "");
        assert_eq!(to_display("garbage"), "garbage");
    }

    #[test]
    fn test_to_storage() {
        assert_eq!(to_storage("15/06/2030"), Some("2030-06-15".to_string()));
        assert_eq!(to_storage(""), None);
        assert_eq!(to_storage("15/06"), None);
        assert_eq!(to_storage("2030-06-15"), None);
    }

    #[test]
    fn test_format_helpers() {
        let d = date(2030, 1, 2);
        assert_eq!(format_display(d), "02/01/2030");
        assert_eq!(format_storage(d), "2030-01-02");
    }
}
