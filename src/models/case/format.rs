//! Date handling for backend timestamps.
//!
//! The backend mixes plain dates (`2025-03-01`), ISO timestamps with an
//! offset (`2025-03-01T10:00:00.000Z`) and the form's own
//! `YYYY-MM-DDTHH:MM`. Values are compared and shown as wall-clock time in
//! whatever offset they carry.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

pub const NOT_SET: &str = "Не указано";

/// Calendar-day part of a stored value (`2025-03-01T10:00Z` -> `2025-03-01`).
pub fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// `HH:MM` part of a stored timestamp, empty when there is none.
pub fn time_part(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(raw.trim()), "%Y-%m-%d").ok()
}

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Whether a submitted date names a different day than the stored one.
pub fn date_differs(submitted: &str, stored: Option<&str>) -> bool {
    let Some(stored) = stored else { return true };
    match (parse_date(submitted), parse_date(stored)) {
        (Some(a), Some(b)) => a != b,
        _ => date_part(submitted) != date_part(stored),
    }
}

/// Whether a submitted date-time differs from the stored one at minute precision.
pub fn datetime_differs(submitted: &str, stored: Option<&str>) -> bool {
    let Some(stored) = stored else { return true };
    match (parse_datetime(submitted), parse_datetime(stored)) {
        (Some(a), Some(b)) => truncate_to_minute(a) != truncate_to_minute(b),
        _ => submitted != stored,
    }
}

fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0).and_then(|d| d.with_nanosecond(0)).unwrap_or(dt)
}

/// `dd.mm.yyyy`, or "Не указано" when absent.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.filter(|s| !s.is_empty()) {
        None => NOT_SET.to_string(),
        Some(s) => parse_date(s)
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

/// `dd.mm.yyyy, HH:MM:SS`, or "Не указано" when absent.
pub fn format_datetime(raw: Option<&str>) -> String {
    match raw.filter(|s| !s.is_empty()) {
        None => NOT_SET.to_string(),
        Some(s) => parse_datetime(s)
            .map(|d| d.format("%d.%m.%Y, %H:%M:%S").to_string())
            .or_else(|| parse_date(s).map(|d| d.format("%d.%m.%Y, 00:00:00").to_string()))
            .unwrap_or_else(|| s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_russian_style() {
        assert_eq!(format_date(Some("2025-03-07")), "07.03.2025");
        assert_eq!(format_date(Some("2025-03-07T00:00:00.000Z")), "07.03.2025");
        assert_eq!(format_date(None), NOT_SET);
        assert_eq!(format_date(Some("")), NOT_SET);
    }

    #[test]
    fn formats_datetimes_with_seconds() {
        assert_eq!(format_datetime(Some("2025-03-07T09:05")), "07.03.2025, 09:05:00");
        assert_eq!(format_datetime(Some("2025-03-07T09:05:30.000Z")), "07.03.2025, 09:05:30");
        assert_eq!(format_datetime(None), NOT_SET);
    }

    #[test]
    fn unparseable_values_are_shown_raw() {
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn date_comparison_ignores_time_component() {
        assert!(!date_differs("2025-03-07", Some("2025-03-07T00:00:00.000Z")));
        assert!(date_differs("2025-03-08", Some("2025-03-07T00:00:00.000Z")));
        assert!(date_differs("2025-03-08", None));
    }

    #[test]
    fn datetime_comparison_is_minute_precise() {
        assert!(!datetime_differs("2025-03-07T10:30", Some("2025-03-07T10:30:00.000Z")));
        assert!(datetime_differs("2025-03-07T10:31", Some("2025-03-07T10:30:00.000Z")));
        assert!(datetime_differs("2025-03-07T10:30", None));
    }

    #[test]
    fn splits_stored_timestamp_for_form_inputs() {
        assert_eq!(date_part("2025-03-07T10:30:00.000Z"), "2025-03-07");
        assert_eq!(time_part("2025-03-07T10:30:00.000Z"), "10:30");
        assert_eq!(time_part("2025-03-07"), "");
    }
}
